use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;

use bazaar_core::{DomainError, ValidationReport};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(report) => validation_error(report),
        DomainError::InvalidId(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_id", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// 422 carrying the full field list.
pub fn validation_error(report: ValidationReport) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": report.to_string(),
            "fields": report.issues(),
        })),
    )
        .into_response()
}

/// 422 for a single malformed path/query/cookie parameter.
pub fn param_error(field: &str, message: &str) -> axum::response::Response {
    let mut report = ValidationReport::new();
    report.reject(field, message);
    validation_error(report)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 418 for the one unicorn that misbehaves.
pub fn unicorn_mischief(name: &str) -> axum::response::Response {
    json_error(
        StatusCode::IM_A_TEAPOT,
        "unicorn_mischief",
        format!("Oops! {name} did something. There goes a rainbow..."),
    )
}

/// 400 login failure, with the debugging header the demo always attached.
pub fn login_rejected() -> axum::response::Response {
    let mut response = json_error(
        StatusCode::BAD_REQUEST,
        "login_failed",
        "Incorrect username and/or password.",
    );
    response.headers_mut().insert(
        HeaderName::from_static("x-error"),
        HeaderValue::from_static("There goes my error"),
    );
    response
}
