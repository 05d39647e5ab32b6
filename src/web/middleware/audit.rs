//! Request logging middleware.
//!
//! Logs every page request with method, path, response status and
//! session id. Runs inside the session layer.

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::session::SessionContext;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let session = req
        .extensions()
        .get::<SessionContext>()
        .map(|s| s.id.to_string())
        .unwrap_or_else(|| "none".to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, %session, elapsed_ms, "Page request failed");
    } else {
        tracing::info!(%method, %path, status, %session, elapsed_ms, "Page request");
    }

    response
}
