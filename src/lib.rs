pub mod answer;
pub mod catalog;
pub mod config;
pub mod core_state;
pub mod models;
pub mod prompt;
pub mod session_log;
pub mod web;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fatal startup errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
    #[error(transparent)]
    Server(#[from] web::server::ServerError),
    #[error("Cannot listen for shutdown signal: {0}")]
    Signal(#[from] std::io::Error),
}

/// Initialize tracing from `RUST_LOG`, falling back to the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Load the catalog, serve the pages, and run until Ctrl-C.
pub async fn run() -> Result<(), AppError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let catalog = catalog::PatientCatalog::load(&config::catalog_path())?;
    let core = Arc::new(core_state::CoreState::new(catalog));

    let server = web::start_server(core, config::bind_addr()).await?;
    tracing::info!(url = %server.session.url, "Open the demo in a browser");

    tokio::signal::ctrl_c().await?;
    server.stop().await;
    Ok(())
}
