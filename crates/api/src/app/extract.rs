//! Checked JSON body extraction.
//!
//! Malformed bodies surface as the same 422 envelope as field-level
//! validation instead of axum's plain-text rejection, so clients see one
//! error shape everywhere.

use axum::Json;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use bazaar_core::ValidationReport;

use crate::app::errors;

/// JSON body whose deserialization failures become 422 responses.
pub struct CheckedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for CheckedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(CheckedJson(value)),
            Err(rejection) => {
                let mut report = ValidationReport::new();
                report.reject("body", rejection_message(&rejection));
                Err(errors::validation_error(report))
            }
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "expected `Content-Type: application/json`".to_string()
        }
        other => other.body_text(),
    }
}
