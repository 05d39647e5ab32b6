//! Page middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Session — resolves or issues the session cookie
//! 2. Audit logger — logs after session resolution, has session id

pub mod audit;
pub mod session;
