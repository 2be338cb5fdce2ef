//! [`Command`] for designing a room from its photo in one go.

use std::{convert::Infallible, fmt, sync::Arc};

use common::operations::{Analyze, Generate, Search};
use tracing as log;

use crate::{
    domain::{search::Query, Design, Product, RoomAnalysis, Url},
    infra::{imaging, Imaging, SearchEngine, Vision},
    Service,
};

use super::{AnalyzeRoom, Command, GenerateRoom, RecommendProducts};

/// [`Command`] for designing a room from its photo: analyzes the photo,
/// recommends [`Product`]s for the analyzed room and places them over the
/// photo, strictly in this order.
#[derive(Clone, Debug)]
pub struct DesignRoom {
    /// [`Url`] of the room photo.
    pub image_url: Url,

    /// Seed to place the [`Product`]s with, if any.
    pub seed: Option<u64>,
}

/// Result of a [`DesignRoom`] [`Command`].
#[derive(Clone, Debug)]
pub struct Outcome {
    /// [`RoomAnalysis`] of the room photo.
    pub analysis: RoomAnalysis,

    /// Recommended [`Product`]s.
    pub products: Vec<Arc<Product>>,

    /// [`Design`] placing the recommended [`Product`]s.
    pub design: Design,
}

impl<V, S, I> Command<DesignRoom> for Service<V, S, I>
where
    V: Vision<Analyze<Url>, Ok = RoomAnalysis>,
    V::Err: fmt::Display,
    S: SearchEngine<Search<Query>, Ok = Vec<Product>>,
    S::Err: fmt::Display,
    I: Imaging<Generate<imaging::Request>, Ok = Url>,
    I::Err: fmt::Display,
{
    type Ok = Outcome;
    type Err = Infallible;

    #[tracing::instrument(skip_all, fields(image = %cmd.image_url))]
    async fn execute(&self, cmd: DesignRoom) -> Result<Self::Ok, Self::Err> {
        let DesignRoom { image_url, seed } = cmd;

        let analysis = self
            .execute(AnalyzeRoom {
                image_url: image_url.clone(),
            })
            .await?;

        let products = self
            .execute(RecommendProducts {
                room: analysis.clone(),
            })
            .await?
            .into_iter()
            .map(Arc::new)
            .collect::<Vec<_>>();
        log::debug!("recommended {} products", products.len());

        let design = self
            .execute(GenerateRoom {
                image_url,
                products: products.clone(),
                room: analysis.clone(),
                seed,
            })
            .await?;

        Ok(Outcome {
            analysis,
            products,
            design,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::sync::Arc;

    use crate::{
        command::double::Failing,
        domain::Url,
        fallback,
        infra::{imaging::Passthrough, search::Mock, vision},
        Command as _, Config, Service,
    };

    use super::DesignRoom;

    fn cmd(seed: Option<u64>) -> DesignRoom {
        DesignRoom {
            image_url: Url::new("https://example.com/room.jpg"),
            seed,
        }
    }

    #[tokio::test]
    async fn places_recommended_products() {
        let service = Service::new(
            Config::default(),
            vision::Mock::default(),
            Mock,
            Passthrough,
        );

        let out = service.execute(cmd(Some(7))).await.unwrap();

        assert_eq!(out.analysis, fallback::room_analysis());
        assert!(!out.products.is_empty());
        assert_eq!(out.design.placements.len(), out.products.len());
        for (placement, product) in
            out.design.placements.iter().zip(&out.products)
        {
            assert!(Arc::ptr_eq(&placement.product, product));
        }
        assert_eq!(
            out.design.image_url,
            Url::new("https://example.com/room.jpg"),
        );
    }

    #[tokio::test]
    async fn survives_every_collaborator_failing() {
        let failing = Failing::default();
        let service = Service::new(
            Config::default(),
            failing.clone(),
            failing.clone(),
            failing.clone(),
        );

        let out = service.execute(cmd(None)).await.unwrap();

        // One analysis, five searches and one generation.
        assert_eq!(failing.calls(), 7);
        assert_eq!(out.analysis, fallback::room_analysis());
        assert_eq!(out.design.placements.len(), out.products.len());
        assert_eq!(
            out.design.image_url,
            Url::new("https://example.com/room.jpg"),
        );
    }
}
