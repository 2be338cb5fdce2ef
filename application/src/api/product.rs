//! Product-related HTTP API.

use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use service::{
    command,
    domain::{search::Query, Product, RoomAnalysis},
    Command as _,
};

use crate::{api::RequestError, AsError, Error, Service};

/// Request of a free-text product search.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// [`Query`] to search with.
    pub query: Query,

    /// [`RoomAnalysis`] of the room the products are searched for.
    ///
    /// Accepted for compatibility, doesn't affect the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_analysis: Option<RoomAnalysis>,
}

/// Searches products by a free-text query.
///
/// # Errors
///
/// Possible error codes:
/// - `EMPTY_QUERY` - provided query is blank;
/// - `INVALID_BODY`, `MALFORMED_BODY` - request body cannot be decoded.
#[tracing::instrument(skip_all, fields(api.name = "searchProducts"))]
pub async fn search(
    Extension(service): Extension<Service>,
    WithRejection(Json(req), _): WithRejection<Json<SearchRequest>, Error>,
) -> Result<Json<Vec<Product>>, Error> {
    let SearchRequest { query, .. } = req;
    if query.is_blank() {
        return Err(RequestError::EmptyQuery.into());
    }

    let products = service
        .execute(command::SearchProducts { query })
        .await
        .map_err(AsError::into_error)?;
    Ok(Json(products))
}

/// Request of product recommendations for an analyzed room.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// [`RoomAnalysis`] to recommend products for.
    pub room_analysis: RoomAnalysis,
}

/// Recommends products for the analyzed room.
///
/// # Errors
///
/// Possible error codes:
/// - `INVALID_BODY`, `MALFORMED_BODY` - request body cannot be decoded.
#[tracing::instrument(skip_all, fields(api.name = "recommendProducts"))]
pub async fn recommend(
    Extension(service): Extension<Service>,
    WithRejection(Json(req), _): WithRejection<Json<RecommendRequest>, Error>,
) -> Result<Json<Vec<Product>>, Error> {
    let RecommendRequest { room_analysis } = req;

    let products = service
        .execute(command::RecommendProducts {
            room: room_analysis,
        })
        .await
        .map_err(AsError::into_error)?;
    Ok(Json(products))
}

#[cfg(test)]
mod spec {
    use std::{collections::HashSet, marker::PhantomData};

    use axum::{body::Body, extract::FromRequest as _, Extension, Json};
    use axum_extra::extract::WithRejection;
    use service::{domain::search::Query, fallback};

    use super::{recommend, search, RecommendRequest, SearchRequest};
    use crate::{api::fixture::service, Error};

    #[tokio::test]
    async fn searches_products() {
        let Json(products) = search(
            Extension(service()),
            WithRejection(
                Json(SearchRequest {
                    query: Query::new("modern table lamp"),
                    room_analysis: None,
                }),
                PhantomData,
            ),
        )
        .await
        .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.to_string(), "mock-lamp-1");
    }

    #[tokio::test]
    async fn rejects_blank_query() {
        let err = search(
            Extension(service()),
            WithRejection(
                Json(SearchRequest {
                    query: Query::new(""),
                    room_analysis: Some(fallback::room_analysis()),
                }),
                PhantomData,
            ),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, "EMPTY_QUERY");
        assert_eq!(err.status_code, http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn recommends_distinct_products() {
        let Json(products) = recommend(
            Extension(service()),
            WithRejection(
                Json(RecommendRequest {
                    room_analysis: fallback::room_analysis(),
                }),
                PhantomData,
            ),
        )
        .await
        .unwrap();

        assert!(!products.is_empty());
        assert!(products.len() <= 8);
        let urls = products.iter().map(|p| &p.url).collect::<HashSet<_>>();
        assert_eq!(urls.len(), products.len());
    }

    #[tokio::test]
    async fn rejects_unknown_room_sizes() {
        let mut room = serde_json::to_value(fallback::room_analysis()).unwrap();
        room["size"] = "huge".into();
        let body = serde_json::json!({ "roomAnalysis": room });
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("/api/recommend-products")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let err =
            WithRejection::<Json<RecommendRequest>, Error>::from_request(req, &())
                .await
                .unwrap_err();

        assert_eq!(err.code, "INVALID_BODY");
        assert_eq!(err.status_code, http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
