use axum::extract::Multipart;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/files", post(create_files))
        .route("/uploadfile", post(create_upload_file))
}

/// Multipart upload: a required `token` text field plus any number of
/// `files` parts, reported by size only (the bytes are discarded).
pub async fn create_files(mut multipart: Multipart) -> axum::response::Response {
    let mut token: Option<String> = None;
    let mut file_sizes: Vec<usize> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => return errors::param_error("body", "malformed multipart body"),
        };
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("token") => match field.text().await {
                Ok(value) => token = Some(value),
                Err(_) => return errors::param_error("token", "must be a text field"),
            },
            Some("files") => match field.bytes().await {
                Ok(bytes) => file_sizes.push(bytes.len()),
                Err(_) => return errors::param_error("files", "failed to read file part"),
            },
            // Unknown parts are skipped.
            _ => {}
        }
    }

    let Some(token) = token else {
        return errors::param_error("token", "required form field");
    };
    if file_sizes.is_empty() {
        return Json(serde_json::json!({ "message": "No file sent" })).into_response();
    }

    Json(serde_json::json!({
        "token": token,
        "file_sizes": file_sizes,
    }))
    .into_response()
}

/// Single-file upload, echoing the client-supplied filename.
pub async fn create_upload_file(mut multipart: Multipart) -> axum::response::Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => return errors::param_error("body", "malformed multipart body"),
        };
        if field.name() == Some("file") {
            let filename = field.file_name().map(str::to_string);
            return Json(serde_json::json!({ "filename": filename })).into_response();
        }
    }

    Json(serde_json::json!({ "message": "No upload file sent" })).into_response()
}
