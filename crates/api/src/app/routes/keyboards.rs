use axum::extract::{Path, Query};
use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::app::dto::KeyboardQuery;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:keyboard_id", get(read_keyboard))
}

/// Keyboard ids live in `1..=999`; the optional query arrives under its
/// public alias `keyboard-query`.
pub async fn read_keyboard(
    Path(keyboard_id): Path<String>,
    Query(query): Query<KeyboardQuery>,
) -> axum::response::Response {
    let keyboard_id: i64 = match keyboard_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::param_error("keyboard_id", "must be an integer"),
    };
    if !(1..=999).contains(&keyboard_id) {
        return errors::param_error("keyboard_id", "must be between 1 and 999");
    }

    let mut results = serde_json::json!({ "keyboard_id": keyboard_id });
    if let Some(q) = query.q {
        results["q"] = serde_json::json!(q);
    }

    Json(results).into_response()
}
