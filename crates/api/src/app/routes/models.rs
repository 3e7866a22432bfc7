use axum::extract::Path;
use axum::{Json, Router, response::IntoResponse, routing::get};

use bazaar_catalog::ModelName;

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:model_name", get(get_model))
}

pub async fn get_model(Path(name): Path<String>) -> axum::response::Response {
    let model: ModelName = match name.parse() {
        Ok(m) => m,
        Err(err) => return errors::domain_error_to_response(err),
    };

    Json(serde_json::json!({
        "model_name": model.as_str(),
        "message": model.tagline(),
    }))
    .into_response()
}
