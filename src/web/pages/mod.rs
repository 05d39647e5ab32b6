pub mod demo;
pub mod metrics;

/// `GET /health` — liveness check.
pub async fn health() -> &'static str {
    "ok"
}
