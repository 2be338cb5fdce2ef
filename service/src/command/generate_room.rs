//! [`Command`] for furnishing a room photo with [`Product`]s.

use std::{convert::Infallible, fmt, sync::Arc};

use common::operations::Generate;
use tracing as log;

use crate::{
    domain::{Design, Product, RoomAnalysis, Url},
    infra::{
        imaging::{Prompt, Request},
        Imaging,
    },
    layout::Randomness,
    Service,
};

use super::Command;

/// [`Command`] for furnishing a room photo with [`Product`]s.
///
/// Hands the photo to the [`Imaging`] collaborator along with a [`Prompt`]
/// describing the [`Product`]s, keeping the original photo whenever it
/// fails, and places the [`Product`]s over the resulting photo.
#[derive(Clone, Debug)]
pub struct GenerateRoom {
    /// [`Url`] of the original room photo.
    pub image_url: Url,

    /// [`Product`]s to furnish the room with.
    pub products: Vec<Arc<Product>>,

    /// [`RoomAnalysis`] of the room photo.
    pub room: RoomAnalysis,

    /// Seed to place the [`Product`]s with, if any.
    ///
    /// [`Config::randomness`] is used if [`None`].
    ///
    /// [`Config::randomness`]: crate::Config::randomness
    pub seed: Option<u64>,
}

impl<V, S, I> Command<GenerateRoom> for Service<V, S, I>
where
    I: Imaging<Generate<Request>, Ok = Url>,
    I::Err: fmt::Display,
{
    type Ok = Design;
    type Err = Infallible;

    async fn execute(&self, cmd: GenerateRoom) -> Result<Self::Ok, Self::Err> {
        let GenerateRoom {
            image_url,
            products,
            room,
            seed,
        } = cmd;

        let prompt = Prompt::new(&room, &products);
        let image_url = self
            .imaging()
            .execute(Generate(Request {
                image_url: image_url.clone(),
                prompt,
            }))
            .await
            .unwrap_or_else(|e| {
                log::warn!(
                    "failed to generate room from `{image_url}`, \
                     keeping original: {e}",
                );
                image_url
            });

        let randomness =
            seed.map_or(self.config().randomness, Randomness::Seeded);
        let placements = self.layout().place_with(&products, &room, randomness);

        Ok(Design {
            image_url,
            placements,
        })
    }
}
