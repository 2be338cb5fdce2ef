//! Service contains the business logic of the application: it analyzes room
//! photos, recommends furnishing products and lays them out over the photos.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod fallback;
pub mod infra;
pub mod layout;

use std::sync::Arc;

use smart_default::SmartDefault;

#[cfg(doc)]
use crate::infra::{Imaging, SearchEngine, Vision};
use crate::layout::{Layout, Randomness};

pub use self::command::Command;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Maximum number of recommended products.
    #[default(8)]
    pub max_products: usize,

    /// Number of room recommendations turned into search queries.
    #[default(2)]
    pub recommendation_queries: usize,

    /// [`Randomness`] of the [`Layout`].
    pub randomness: Randomness,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<V, S, I> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Layout`] placing products.
    layout: Arc<Layout>,

    /// [`Vision`] collaborator of this [`Service`].
    vision: V,

    /// [`SearchEngine`] collaborator of this [`Service`].
    search: S,

    /// [`Imaging`] collaborator of this [`Service`].
    imaging: I,
}

impl<V, S, I> Service<V, S, I> {
    /// Creates a new [`Service`] with the provided collaborators and the
    /// standard [`Layout`].
    pub fn new(config: Config, vision: V, search: S, imaging: I) -> Self {
        Self {
            config,
            layout: Arc::new(Layout::standard()),
            vision,
            search,
            imaging,
        }
    }

    /// Replaces the [`Layout`] of this [`Service`].
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Arc::new(layout);
        self
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Layout`] of this [`Service`].
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns [`Vision`] collaborator of this [`Service`].
    pub fn vision(&self) -> &V {
        &self.vision
    }

    /// Returns [`SearchEngine`] collaborator of this [`Service`].
    pub fn search(&self) -> &S {
        &self.search
    }

    /// Returns [`Imaging`] collaborator of this [`Service`].
    pub fn imaging(&self) -> &I {
        &self.imaging
    }
}
