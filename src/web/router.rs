//! Page router.
//!
//! Middleware stack (outermost → innermost):
//! 1. Cache-Control: no-store → 2. Session cookie → 3. Audit logger

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core_state::CoreState;
use crate::web::middleware;
use crate::web::pages;

/// Build the router serving both demo pages plus `/health`.
pub fn pages_router(core: Arc<CoreState>) -> Router {
    // Layers are applied from bottom (innermost) to top (outermost).
    Router::new()
        .route("/", get(pages::demo::show))
        .route("/metrics", get(pages::metrics::show))
        .route("/health", get(pages::health))
        .with_state(core)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::session::ensure_session))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
