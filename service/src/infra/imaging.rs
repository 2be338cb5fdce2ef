//! [`Imaging`] collaborator editing room photos.

use std::{convert::Infallible, sync::Arc};

use common::operations::Generate;
use derive_more::{AsRef, Display};
use itertools::Itertools as _;
use tracing as log;

use crate::domain::{Product, RoomAnalysis, Url};

/// Room photo editing.
pub use common::Handler as Imaging;

/// Request to furnish a room photo with [`Product`]s.
#[derive(Clone, Debug)]
pub struct Request {
    /// [`Url`] of the original room photo.
    pub image_url: Url,

    /// [`Prompt`] describing the desired result.
    pub prompt: Prompt,
}

/// Text prompt for an image generation model.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Prompt(String);

impl Prompt {
    /// Composes a [`Prompt`] integrating the provided [`Product`]s into the
    /// analyzed room.
    #[must_use]
    pub fn new(room: &RoomAnalysis, products: &[Arc<Product>]) -> Self {
        let RoomAnalysis {
            room_type,
            style,
            colors,
            lighting,
            existing_furniture,
            ..
        } = room;
        let items = products.iter().map(|p| &p.title).join(", ");
        let colors = colors.join(", ");
        let furniture = existing_furniture.join(", ");

        Self(format!(
            "Transform this {room_type} image by seamlessly integrating the \
             following items: {items}. The room has a {style} style with \
             {colors} color palette. The lighting is {lighting}. Place the \
             items naturally in the space, maintaining realistic proportions \
             and lighting. Ensure the items complement the existing \
             {furniture} furniture. The final image should look \
             photorealistic and professionally staged.",
        ))
    }
}

/// [`Imaging`] collaborator leaving the original room photo unmodified.
///
/// Text-to-image models generate new pictures instead of editing existing
/// ones, so the [`Prompt`] is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Imaging<Generate<Request>> for Passthrough {
    type Ok = Url;
    type Err = Infallible;

    async fn execute(
        &self,
        Generate(req): Generate<Request>,
    ) -> Result<Self::Ok, Self::Err> {
        let Request { image_url, prompt } = req;
        log::debug!("keeping `{image_url}` unmodified for prompt: {prompt}");
        Ok(image_url)
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Generate, Handler as _};

    use super::{Passthrough, Prompt, Request};
    use crate::{domain::Url, fallback};

    #[test]
    fn composes_prompt() {
        let products = fallback::products()
            .into_iter()
            .take(2)
            .map(Into::into)
            .collect::<Vec<_>>();

        let prompt =
            Prompt::new(&fallback::room_analysis(), &products).to_string();

        assert!(prompt.starts_with(
            "Transform this living room image by seamlessly integrating the \
             following items: Modern Table Lamp, Decorative Throw Pillows.",
        ));
        assert!(prompt
            .contains("modern style with white, gray, beige color palette"));
        assert!(prompt.contains("existing sofa, coffee table"));
    }

    #[tokio::test]
    async fn keeps_original_image() {
        let image_url = Url::new("https://example.com/room.jpg");

        let result = Passthrough
            .execute(Generate(Request {
                image_url: image_url.clone(),
                prompt: Prompt::new(&fallback::room_analysis(), &[]),
            }))
            .await
            .unwrap();

        assert_eq!(result, image_url);
    }
}
