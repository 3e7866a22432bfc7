use std::time::Instant;

use axum::middleware::Next;
use axum::response::Response;

/// Log every request with its outcome and latency.
///
/// Deliberate rejections (4xx) log at `warn`, the rest at `info`.
pub async fn request_log(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_client_error() {
        tracing::warn!(%method, path, %status, elapsed_ms, "request rejected");
    } else {
        tracing::info!(%method, path, %status, elapsed_ms, "request");
    }

    response
}
