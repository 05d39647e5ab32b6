//! Browser-facing pages.
//!
//! Two HTML pages (selector and learner metrics) served by axum. Pages are
//! rendered server-side; form inputs travel as query parameters, so every
//! change of selection is a fresh `GET /`.

pub mod error;
pub mod middleware;
pub mod pages;
pub mod render;
pub mod router;
pub mod server;

pub use router::pages_router;
pub use server::{start_server, DemoServer, ServerSession};
