//! [`Design`] definitions.

use serde::{Deserialize, Serialize};

use super::{Placement, Url};

/// Room photo furnished with [`Placement`]s.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// [`Url`] of the photo to draw the [`Placement`]s over.
    pub image_url: Url,

    /// [`Placement`]s of the recommended products.
    pub placements: Vec<Placement>,
}
