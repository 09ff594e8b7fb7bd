pub mod api_client;
pub mod config;
pub mod dataset;
pub mod directory;
pub mod listing;
pub mod markup;
pub mod models;
pub mod nav;
pub mod requests;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedders that do not install their own
/// subscriber. Honors RUST_LOG, falling back to the configured default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
