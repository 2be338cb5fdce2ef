//! Domain definitions.

pub mod design;
pub mod placement;
pub mod product;
pub mod room;
pub mod search;

use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

pub use self::{
    design::Design, placement::Placement, product::Product, room::RoomAnalysis,
};

/// Link to a web resource: a product page, a thumbnail or a room photo.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Url(String);

impl Url {
    /// Creates a new [`Url`].
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Indicates whether this [`Url`] contains nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
