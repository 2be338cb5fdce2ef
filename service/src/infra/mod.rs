//! Infrastructure layer: external collaborators of the [`Service`].
//!
//! [`Service`]: crate::Service

pub mod imaging;
pub mod search;
pub mod vision;

pub use self::{imaging::Imaging, search::SearchEngine, vision::Vision};
