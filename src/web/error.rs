//! Page-level errors rendered as HTML with a matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::core_state::CoreError;
use crate::models::ParseEnumError;
use crate::web::render;

/// Errors a page handler can return.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            PageError::NotFound(detail) | PageError::BadRequest(detail) => detail.clone(),
            PageError::Internal(detail) => {
                tracing::error!(detail, "Page internal error");
                "An internal error occurred".to_string()
            }
        };

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Html(render::error_page(title, &message))).into_response()
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LockPoisoned => PageError::Internal("session store lock poisoned".into()),
        }
    }
}

impl From<ParseEnumError> for PageError {
    fn from(err: ParseEnumError) -> Self {
        PageError::BadRequest(err.to_string())
    }
}
