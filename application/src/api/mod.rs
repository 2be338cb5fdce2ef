//! HTTP API definitions.

pub mod product;
pub mod room;

use axum::{routing::post, Extension, Router};

use crate::{define_error, Service};

/// Creates a [`Router`] serving the HTTP API with the provided [`Service`].
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/api/analyze-room", post(room::analyze))
        .route("/api/generate-room", post(room::generate))
        .route("/api/design-room", post(room::design))
        .route("/api/search-products", post(product::search))
        .route("/api/recommend-products", post(product::recommend))
        .layer(Extension(service))
}

define_error! {
    enum RequestError {
        #[code = "EMPTY_IMAGE_URL"]
        #[status = UNPROCESSABLE_ENTITY]
        #[message = "Image URL must not be empty"]
        EmptyImageUrl,

        #[code = "EMPTY_QUERY"]
        #[status = UNPROCESSABLE_ENTITY]
        #[message = "Search query must not be empty"]
        EmptyQuery,
    }
}
