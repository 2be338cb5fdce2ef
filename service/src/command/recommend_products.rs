//! [`Command`] for recommending furnishing [`Product`]s for a room.

use std::{convert::Infallible, fmt};

use common::operations::Search;
use futures::future;
use itertools::Itertools as _;
use tracing as log;

use crate::{
    domain::{search::Query, Product, RoomAnalysis},
    fallback,
    infra::SearchEngine,
    Service,
};

use super::{Command, SearchProducts};

/// [`Command`] for recommending furnishing [`Product`]s for an analyzed room.
///
/// Searches every [`Query`] derived from the [`RoomAnalysis`] concurrently,
/// concatenates the results in [`Query`] order, drops repeated [`Product`]
/// links and keeps at most [`Config::max_products`]. Falls back to
/// [`fallback::products()`] if nothing is left.
///
/// [`Config::max_products`]: crate::Config::max_products
#[derive(Clone, Debug)]
pub struct RecommendProducts {
    /// [`RoomAnalysis`] to recommend [`Product`]s for.
    pub room: RoomAnalysis,
}

impl<V, S, I> Command<RecommendProducts> for Service<V, S, I>
where
    S: SearchEngine<Search<Query>, Ok = Vec<Product>>,
    S::Err: fmt::Display,
{
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: RecommendProducts,
    ) -> Result<Self::Ok, Self::Err> {
        let RecommendProducts { room } = cmd;

        let queries =
            Query::for_room(&room, self.config().recommendation_queries);
        log::debug!(
            "searching {} queries for `{}`",
            queries.len(),
            room.room_type,
        );

        let found = future::join_all(
            queries
                .into_iter()
                .map(|query| self.execute(SearchProducts { query })),
        )
        .await;

        let products = found
            .into_iter()
            .flat_map(|res| res.unwrap_or_else(|e| match e {}))
            .unique_by(|p| p.url.clone())
            .take(self.config().max_products)
            .collect::<Vec<_>>();
        if products.is_empty() {
            log::warn!("no products found, using fallback catalog");
            return Ok(fallback::products());
        }
        Ok(products)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::double::{Failing, Shelf},
        domain::{product, Product, Url},
        fallback,
        infra::{imaging::Passthrough, search::Mock, vision},
        Command as _, Config, Service,
    };

    use super::RecommendProducts;

    fn product(id: &str, url: &str) -> Product {
        Product {
            id: id.parse().unwrap(),
            title: "Brass Floor Lamp".parse().unwrap(),
            price: product::Price::new("$120.00"),
            url: Url::new(url),
            image_url: Url::new("https://example.com/thumb.jpg"),
            description: None,
            brand: None,
            category: None,
        }
    }

    fn service<S>(
        search: S,
        config: Config,
    ) -> Service<vision::Mock, S, Passthrough> {
        Service::new(config, vision::Mock::default(), search, Passthrough)
    }

    #[tokio::test]
    async fn collects_mock_results_in_query_order() {
        let products = service(Mock, Config::default())
            .execute(RecommendProducts {
                room: fallback::room_analysis(),
            })
            .await
            .unwrap();

        // Both generic queries hit the same general item, both lighting
        // queries hit the same lamp.
        let ids = products.iter().map(|p| p.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, ["mock-general-1", "mock-lamp-1", "mock-pillow-1"]);
    }

    #[tokio::test]
    async fn drops_repeated_links() {
        let shelf = Shelf(vec![
            product("a", "https://shop.com/a"),
            product("b", "https://shop.com/b"),
            product("c", "https://shop.com/a"),
        ]);

        let products = service(shelf, Config::default())
            .execute(RecommendProducts {
                room: fallback::room_analysis(),
            })
            .await
            .unwrap();

        let ids = products.iter().map(|p| p.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn limits_number_of_products() {
        let shelf = Shelf(
            (0..20)
                .map(|i| {
                    product(&format!("p{i}"), &format!("https://shop.com/{i}"))
                })
                .collect(),
        );
        let config = Config {
            max_products: 3,
            ..Config::default()
        };

        let products = service(shelf, config)
            .execute(RecommendProducts {
                room: fallback::room_analysis(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id.to_string(), "p0");
    }

    #[tokio::test]
    async fn falls_back_per_query_on_search_failure() {
        let search = Failing::default();

        let products = service(search.clone(), Config::default())
            .execute(RecommendProducts {
                room: fallback::room_analysis(),
            })
            .await
            .unwrap();

        assert_eq!(search.calls(), 5);
        assert!(!products.is_empty());
        assert!(products.len() <= 8);
    }

    #[tokio::test]
    async fn falls_back_to_catalog_when_nothing_found() {
        let products = service(Shelf(vec![]), Config::default())
            .execute(RecommendProducts {
                room: fallback::room_analysis(),
            })
            .await
            .unwrap();

        assert_eq!(products, fallback::products());
    }
}
