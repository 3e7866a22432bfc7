use serde::Deserialize;

use bazaar_catalog::{Item, ItemOptions, Offer};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /items/:item_id`: the item plus embedded options.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub item: Item,
    #[serde(default)]
    pub options: Option<ItemOptions>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    pub short: bool,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeyboardQuery {
    /// Public alias: clients send `?keyboard-query=...`.
    #[serde(rename = "keyboard-query", default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_page_limit")]
    pub limit: usize,
}

fn default_page_limit() -> usize {
    10
}

/// `needy` is required; kept optional here so the handler can emit the
/// 422 envelope itself instead of axum's bare rejection.
#[derive(Debug, Deserialize)]
pub struct UserItemQuery {
    #[serde(default)]
    pub needy: Option<String>,
}

/// Collected with `axum_extra`'s `Query`, which folds repeated
/// `list-query` keys into the vector.
#[derive(Debug, Deserialize)]
pub struct EchoItemsQuery {
    #[serde(rename = "list-query", default)]
    pub list_query: Vec<String>,
    /// Undocumented escape hatch; short-circuits the echo when present.
    #[serde(default)]
    pub hidden_query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub optional_query: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "name": item.name,
        "description": item.description,
        "price": item.price,
        "tax": item.tax,
        "tags": item.tags,
        "images": item.images,
    })
}

pub fn offer_to_json(offer: &Offer) -> serde_json::Value {
    let mut body = serde_json::json!({
        "id": offer.id.to_string(),
        "name": offer.name,
        "description": offer.description,
        "price": offer.price,
        "items": offer.items.iter().map(item_to_json).collect::<Vec<_>>(),
        "start_at": offer.start_at,
        "end_at": offer.end_at,
        "repeat_at": offer.repeat_at,
    });
    if let Some(seconds) = offer.duration_seconds() {
        body["duration"] = serde_json::json!(seconds);
    }
    body
}
