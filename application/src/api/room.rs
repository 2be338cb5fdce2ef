//! Room-related HTTP API.

use std::sync::Arc;

use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use service::{
    command,
    domain::{Design, Placement, Product, RoomAnalysis, Url},
    Command as _,
};

use crate::{api::RequestError, AsError, Error, Service};

/// Request of a room photo analysis.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// [`Url`] of the room photo.
    pub image_url: Url,
}

/// Analyzes the room photo.
///
/// # Errors
///
/// Possible error codes:
/// - `EMPTY_IMAGE_URL` - provided image URL is blank;
/// - `INVALID_BODY`, `MALFORMED_BODY` - request body cannot be decoded.
#[tracing::instrument(skip_all, fields(api.name = "analyzeRoom"))]
pub async fn analyze(
    Extension(service): Extension<Service>,
    WithRejection(Json(req), _): WithRejection<Json<AnalyzeRequest>, Error>,
) -> Result<Json<RoomAnalysis>, Error> {
    let AnalyzeRequest { image_url } = req;
    if image_url.is_blank() {
        return Err(RequestError::EmptyImageUrl.into());
    }

    let analysis = service
        .execute(command::AnalyzeRoom { image_url })
        .await
        .map_err(AsError::into_error)?;
    Ok(Json(analysis))
}

/// Request of a room photo furnishing.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// [`Url`] of the original room photo.
    pub original_image_url: Url,

    /// [`Product`]s to furnish the room with.
    pub products: Vec<Product>,

    /// [`RoomAnalysis`] of the room photo.
    pub room_analysis: RoomAnalysis,

    /// Seed making the [`Placement`]s reproducible, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Furnishes the room photo with the provided products.
///
/// # Errors
///
/// Possible error codes:
/// - `EMPTY_IMAGE_URL` - provided image URL is blank;
/// - `INVALID_BODY`, `MALFORMED_BODY` - request body cannot be decoded.
#[tracing::instrument(skip_all, fields(api.name = "generateRoom"))]
pub async fn generate(
    Extension(service): Extension<Service>,
    WithRejection(Json(req), _): WithRejection<Json<GenerateRequest>, Error>,
) -> Result<Json<Design>, Error> {
    let GenerateRequest {
        original_image_url,
        products,
        room_analysis,
        seed,
    } = req;
    if original_image_url.is_blank() {
        return Err(RequestError::EmptyImageUrl.into());
    }

    let design = service
        .execute(command::GenerateRoom {
            image_url: original_image_url,
            products: products.into_iter().map(Arc::new).collect(),
            room: room_analysis,
            seed,
        })
        .await
        .map_err(AsError::into_error)?;
    Ok(Json(design))
}

/// Request of a whole room design.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    /// [`Url`] of the room photo.
    pub image_url: Url,

    /// Seed making the [`Placement`]s reproducible, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Response of a whole room design.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    /// [`RoomAnalysis`] of the room photo.
    pub analysis: RoomAnalysis,

    /// Recommended [`Product`]s.
    pub products: Vec<Arc<Product>>,

    /// [`Url`] of the photo to draw the [`Placement`]s over.
    pub image_url: Url,

    /// [`Placement`]s of the recommended [`Product`]s.
    pub placements: Vec<Placement>,
}

impl From<command::design_room::Outcome> for DesignResponse {
    fn from(outcome: command::design_room::Outcome) -> Self {
        let command::design_room::Outcome {
            analysis,
            products,
            design:
                Design {
                    image_url,
                    placements,
                },
        } = outcome;

        Self {
            analysis,
            products,
            image_url,
            placements,
        }
    }
}

/// Analyzes the room photo, recommends products for it and places them over
/// the photo.
///
/// # Errors
///
/// Possible error codes:
/// - `EMPTY_IMAGE_URL` - provided image URL is blank;
/// - `INVALID_BODY`, `MALFORMED_BODY` - request body cannot be decoded.
#[tracing::instrument(skip_all, fields(api.name = "designRoom"))]
pub async fn design(
    Extension(service): Extension<Service>,
    WithRejection(Json(req), _): WithRejection<Json<DesignRequest>, Error>,
) -> Result<Json<DesignResponse>, Error> {
    let DesignRequest { image_url, seed } = req;
    if image_url.is_blank() {
        return Err(RequestError::EmptyImageUrl.into());
    }

    let outcome = service
        .execute(command::DesignRoom { image_url, seed })
        .await
        .map_err(AsError::into_error)?;
    Ok(Json(outcome.into()))
}
