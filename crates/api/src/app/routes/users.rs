use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::cookie::CookieJar;

use bazaar_catalog::{NewUser, persist_user};

use crate::app::dto::{LoginForm, UserItemQuery};
use crate::app::errors;
use crate::app::extract::CheckedJson;

pub fn router() -> Router {
    Router::new()
        .route("/users/me", get(read_current_user))
        .route("/users/:username/hi", get(say_hi))
        .route("/users/:user_id/items/:item_id", get(read_user_item))
        .route("/user", post(create_user))
        .route("/login", post(login))
}

/// Identify the caller from the `session_token` cookie.
pub async fn read_current_user(jar: CookieJar) -> axum::response::Response {
    let Some(token) = jar.get("session_token") else {
        return errors::param_error("session_token", "required cookie");
    };

    Json(serde_json::json!({
        "user_id": format!("the current user: {}", token.value()),
    }))
    .into_response()
}

pub async fn say_hi(Path(username): Path<String>) -> impl IntoResponse {
    Json(serde_json::json!({ "msg": format!("hi {username}") }))
}

pub async fn read_user_item(
    Path((user_id, item_id)): Path<(String, String)>,
    Query(query): Query<UserItemQuery>,
) -> axum::response::Response {
    let user_id: i64 = match user_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::param_error("user_id", "must be an integer"),
    };
    let Some(needy) = query.needy else {
        return errors::param_error("needy", "required query parameter");
    };

    Json(serde_json::json!({
        "user_id": user_id,
        "item_id": item_id,
        "needy": needy,
    }))
    .into_response()
}

/// Register a user; the response never carries a password in any form.
pub async fn create_user(CheckedJson(user): CheckedJson<NewUser>) -> axum::response::Response {
    if let Err(err) = user.validate() {
        return errors::domain_error_to_response(err);
    }

    let stored = persist_user(user);
    (StatusCode::CREATED, Json(stored.profile())).into_response()
}

/// Demo login: one fixed password unlocks a fixed token.
pub async fn login(Form(form): Form<LoginForm>) -> axum::response::Response {
    if form.password != "password123" {
        return errors::login_rejected();
    }

    Json(serde_json::json!({
        "token": "user_token",
        "username": form.username,
    }))
    .into_response()
}
