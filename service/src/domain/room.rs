//! [`RoomAnalysis`] definitions.

use common::define_kind;
use serde::{Deserialize, Serialize};

/// Summary of the visual characteristics of a room photo.
///
/// All the descriptors except [`Size`] are open-vocabulary, as they originate
/// from an external analysis collaborator.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    /// Type of the room, like `living room`.
    pub room_type: String,

    /// Interior style of the room, like `modern`.
    pub style: String,

    /// Dominant color names of the room, in order of prominence.
    pub colors: Vec<String>,

    /// Lighting conditions of the room, like `natural`.
    pub lighting: String,

    /// [`Size`] of the room.
    pub size: Size,

    /// Furniture already present in the room.
    pub existing_furniture: Vec<String>,

    /// Free-text design suggestions for the room.
    pub recommendations: Vec<String>,
}

define_kind! {
    #[doc = "Size of a room."]
    enum Size {
        #[doc = "Small room."]
        Small,

        #[doc = "Medium room."]
        Medium,

        #[doc = "Large room."]
        Large,
    }
}
