use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Precision Education Demo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed listen port (same default as the hosted prototype).
pub const DEFAULT_PORT: u16 = 8501;

/// Cookie carrying the browser session id.
pub const SESSION_COOKIE: &str = "pe_session";

/// Catalog file name, resolved under `data/`.
pub const CATALOG_FILE: &str = "fake_patients.json";

/// Loopback bind address for the demo server.
pub fn bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

/// Directory holding static demo data, relative to the crate root.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Fixed location of the mock patient catalog.
pub fn catalog_path() -> PathBuf {
    data_dir().join(CATALOG_FILE)
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "precision_education=info,tower_http=warn"
}
