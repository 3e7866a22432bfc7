use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Query as MultiQuery;

use bazaar_catalog::{Item, ItemPatch, Listing, query};

use crate::app::dto::{
    self, EchoItemsQuery, PageQuery, SearchQuery, UpdateItemQuery, UpdateItemRequest,
};
use crate::app::errors;
use crate::app::extract::CheckedJson;
use crate::app::stores::AppStores;

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item).get(list_items))
        .route(
            "/items/:item_id",
            get(get_item).put(update_item).patch(patch_item),
        )
        .route("/echo/items", get(echo_items))
        .route("/search", get(search_items))
}

/// Page through the listing feed.
pub async fn list_items(
    Extension(stores): Extension<Arc<AppStores>>,
    Query(page): Query<PageQuery>,
) -> axum::response::Response {
    let rows: Vec<&Listing> = stores
        .listings
        .iter()
        .skip(page.skip)
        .take(page.limit)
        .collect();
    Json(rows).into_response()
}

/// Case-insensitive exact-name search over the listing feed.
pub async fn search_items(
    Extension(stores): Extension<Arc<AppStores>>,
    Query(search): Query<SearchQuery>,
) -> axum::response::Response {
    let results: Vec<&Listing> = match &search.q {
        None => stores.listings.iter().collect(),
        Some(q) => {
            let report = query::check_query_len("q", q);
            if !report.is_empty() {
                return errors::validation_error(report);
            }
            stores
                .listings
                .iter()
                .filter(|listing| listing.item_name.eq_ignore_ascii_case(q))
                .collect()
        }
    };

    Json(serde_json::json!({ "results": results })).into_response()
}

/// Echo the repeated `list-query` key; `hidden_query` short-circuits.
pub async fn echo_items(MultiQuery(query): MultiQuery<EchoItemsQuery>) -> axum::response::Response {
    if let Some(hidden) = query.hidden_query {
        return Json(serde_json::json!({ "hidden_query": hidden })).into_response();
    }

    Json(serde_json::json!({ "q": query.list_query })).into_response()
}

pub async fn create_item(CheckedJson(item): CheckedJson<Item>) -> axum::response::Response {
    if let Err(err) = item.validate() {
        return errors::domain_error_to_response(err);
    }

    let mut body = dto::item_to_json(&item);
    body["importance"] = serde_json::json!("importance");
    if let Some(gross) = item.price_with_tax() {
        body["price_with_tax"] = serde_json::json!(gross);
    }

    Json(body).into_response()
}

/// Stored catalog item by key.
pub async fn get_item(
    Extension(stores): Extension<Arc<AppStores>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    let catalog = stores.catalog.read().unwrap();
    match catalog.get(&item_id) {
        Some(item) => Json(dto::item_to_json(item)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "Item not found."),
    }
}

/// Full update preview: validates the item, its options, and the search
/// query together, then echoes the merged result without storing it.
pub async fn update_item(
    Path(item_id): Path<String>,
    Query(params): Query<UpdateItemQuery>,
    CheckedJson(body): CheckedJson<UpdateItemRequest>,
) -> axum::response::Response {
    let item_id: i64 = match item_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::param_error("item_id", "must be an integer"),
    };
    let q = match &params.q {
        Some(q) => q.clone(),
        None => return errors::param_error("q", "required query parameter"),
    };

    let options = body.options.unwrap_or_default();

    let mut report = query::check_query_text("q", &q);
    if let Some(optional) = &params.optional_query {
        report.merge(query::check_max_len("optional_query", optional, 3));
    }
    report.nest("item", body.item.check());
    report.merge(options.check_for(&body.item));
    if !report.is_empty() {
        return errors::validation_error(report);
    }

    if options.hidden {
        return Json(serde_json::json!({
            "query": q,
            "opt_query": params.optional_query,
        }))
        .into_response();
    }

    let mut item = dto::item_to_json(&body.item);
    item["item_id"] = serde_json::json!(item_id);
    item["promotion"] = serde_json::json!(options.promotion);
    item["shipping_available"] = serde_json::json!(options.shipping_available);

    Json(serde_json::json!({
        "query": q,
        "opt_query": params.optional_query,
        "item": item,
    }))
    .into_response()
}

/// Merge the provided fields into the stored item.
pub async fn patch_item(
    Extension(stores): Extension<Arc<AppStores>>,
    Path(item_id): Path<String>,
    CheckedJson(patch): CheckedJson<ItemPatch>,
) -> axum::response::Response {
    if let Err(err) = patch.validate() {
        return errors::domain_error_to_response(err);
    }

    let mut catalog = stores.catalog.write().unwrap();
    let Some(stored) = catalog.get(&item_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Item not found.");
    };

    let updated = stored.merged(patch);
    catalog.insert(item_id, updated.clone());
    drop(catalog);

    Json(dto::item_to_json(&updated)).into_response()
}
