use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:name", get(read_unicorn))
}

/// One unicorn is trouble; everyone else is fine.
pub async fn read_unicorn(Path(name): Path<String>) -> axum::response::Response {
    if name == "yolo" {
        return errors::unicorn_mischief(&name);
    }

    Json(serde_json::json!({ "unicorn_name": name })).into_response()
}
