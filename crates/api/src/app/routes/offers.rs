use std::collections::BTreeMap;

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use bazaar_catalog::{Image, Offer};
use bazaar_core::ValidationReport;

use crate::app::dto;
use crate::app::errors;
use crate::app::extract::CheckedJson;

pub fn router() -> Router {
    Router::new()
        .route("/offers", post(create_offer))
        .route("/images", post(create_images))
        .route("/index-weights", post(create_index_weights))
}

/// Validate and echo an offer, adding the derived window duration.
pub async fn create_offer(CheckedJson(offer): CheckedJson<Offer>) -> axum::response::Response {
    if let Err(err) = offer.validate() {
        return errors::domain_error_to_response(err);
    }

    Json(dto::offer_to_json(&offer)).into_response()
}

pub async fn create_images(
    CheckedJson(images): CheckedJson<Vec<Image>>,
) -> axum::response::Response {
    let mut report = ValidationReport::new();
    for (i, image) in images.iter().enumerate() {
        report.nest(&format!("[{i}]"), image.check());
    }
    if !report.is_empty() {
        return errors::validation_error(report);
    }

    for image in &images {
        tracing::debug!(url = %image.url, "image received");
    }

    Json(images).into_response()
}

/// JSON object keys arrive as strings; serde converts them to integer
/// indices (and back on the way out).
pub async fn create_index_weights(
    CheckedJson(weights): CheckedJson<BTreeMap<i64, f64>>,
) -> axum::response::Response {
    Json(weights).into_response()
}
