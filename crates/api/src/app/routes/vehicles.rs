use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::errors;
use crate::app::stores::AppStores;

pub fn router() -> Router {
    Router::new().route("/:vehicle_id", get(read_vehicle))
}

/// Garage lookup; clients send the short id (`1`, `2`), the store keys are
/// `vehicle1`, `vehicle2`.
pub async fn read_vehicle(
    Extension(stores): Extension<Arc<AppStores>>,
    Path(vehicle_id): Path<String>,
) -> axum::response::Response {
    match stores.garage.get(&format!("vehicle{vehicle_id}")) {
        Some(vehicle) => Json(vehicle).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "Vehicle not found."),
    }
}
