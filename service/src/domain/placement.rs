//! [`Placement`] definitions.

use std::sync::Arc;

use common::Percent;
use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};

use super::{product, Product};

/// Position of a single [`Product`] on a room canvas.
///
/// Coordinates are [`Percent`]s of the canvas dimensions and are not clamped,
/// so a [`Placement`] may overflow the canvas edge.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// ID of this [`Placement`].
    pub id: Id,

    /// [`Product`] rendered by this [`Placement`].
    pub product: Arc<Product>,

    /// Left edge of the bounding box.
    pub x: Percent,

    /// Top edge of the bounding box.
    pub y: Percent,

    /// Width of the bounding box.
    pub width: Percent,

    /// Height of the bounding box.
    pub height: Percent,

    /// Rotation of the bounding box in degrees, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Placement {
    /// Returns the right edge of this [`Placement`]'s bounding box.
    #[must_use]
    pub fn right(&self) -> Percent {
        self.x + self.width
    }

    /// Returns the bottom edge of this [`Placement`]'s bounding box.
    #[must_use]
    pub fn bottom(&self) -> Percent {
        self.y + self.height
    }

    /// Indicates whether this [`Placement`] fits the canvas entirely.
    #[must_use]
    pub fn fits_canvas(&self) -> bool {
        self.x.is_within_canvas()
            && self.y.is_within_canvas()
            && self.right().is_within_canvas()
            && self.bottom().is_within_canvas()
    }
}

/// ID of a [`Placement`], derived from the ID of its [`Product`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Prefix of every [`Id`].
    pub const PREFIX: &'static str = "placement-";

    /// Derives the [`Id`] of a [`Placement`] rendering the [`Product`] with
    /// the provided ID.
    #[must_use]
    pub fn of(product: &product::Id) -> Self {
        Self(format!("{}{product}", Self::PREFIX))
    }
}
