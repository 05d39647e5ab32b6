//! Browser session cookie middleware.
//!
//! Reads the session id from the `Cookie` header, or mints a new one,
//! and injects `SessionContext` into request extensions. New sessions
//! get a `Set-Cookie` header on the way out.

use axum::http::{header, HeaderMap, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::config::SESSION_COOKIE;

/// Session identity for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub id: Uuid,
    /// True when no valid cookie arrived with the request.
    pub is_new: bool,
}

/// Resolve the browser session for every request.
pub async fn ensure_session(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let session = match session_from_headers(req.headers()) {
        Some(id) => SessionContext { id, is_new: false },
        None => SessionContext {
            id: Uuid::new_v4(),
            is_new: true,
        },
    };
    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if session.is_new {
        match HeaderValue::from_str(&session_cookie(session.id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
                tracing::debug!(session = %session.id, "New session issued");
            }
            Err(e) => tracing::warn!("Cannot encode session cookie: {e}"),
        }
    }
    response
}

/// Find a well-formed session id among the request's cookies.
pub fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .find_map(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for a session id (browser-session lifetime).
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
