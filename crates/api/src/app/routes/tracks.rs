use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:track_id", get(read_track))
}

/// Track 3 is refused on principle.
pub async fn read_track(Path(track_id): Path<String>) -> axum::response::Response {
    let track_id: i64 = match track_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::param_error("track_id", "must be an integer"),
    };

    if track_id == 3 {
        return errors::json_error(
            StatusCode::IM_A_TEAPOT,
            "unlucky_track",
            "Nope! I don't like 3.",
        );
    }

    Json(serde_json::json!({ "track_id": track_id })).into_response()
}
