use axum::extract::{Path, Query};
use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::app::dto::CardQuery;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/:card_id", get(read_card))
}

/// Card lookup; `short` trims the response, `q` is echoed when present.
pub async fn read_card(
    Path(card_id): Path<String>,
    Query(query): Query<CardQuery>,
) -> axum::response::Response {
    let card_id: i64 = match card_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::param_error("card_id", "must be an integer"),
    };

    let mut card = serde_json::json!({ "card_id": card_id });
    if let Some(q) = query.q {
        card["q"] = serde_json::json!(q);
    }
    if !query.short {
        card["description"] =
            serde_json::json!("An amazing card with an extra long description");
    }

    Json(card).into_response()
}
