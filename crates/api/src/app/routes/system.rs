use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// The one route every demo starts with.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Hello, world!" }))
}

/// Echo selected request headers back to the caller.
///
/// `strange_header` is matched literally (no underscore-to-dash mapping),
/// and every `X-Token` occurrence is collected.
pub async fn echo_headers(headers: HeaderMap) -> impl IntoResponse {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let strange_header = headers.get("strange_header").and_then(|v| v.to_str().ok());

    let x_tokens: Vec<&str> = headers
        .get_all("x-token")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    let x_tokens = if x_tokens.is_empty() {
        None
    } else {
        Some(x_tokens)
    };

    Json(serde_json::json!({
        "user_agent": user_agent,
        "strange_header": strange_header,
        "x_token": x_tokens,
    }))
}
