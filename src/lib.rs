pub mod api;
pub mod clock;
pub mod collection;
pub mod config;
pub mod confirm;
pub mod core_state; // Session state behind one lock
pub mod generators; // Deterministic demo data from ZIP codes and names
pub mod map_search;
pub mod models;
pub mod navigation; // Route table and guard
pub mod screens;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Start the portal and serve until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let app_config = config::AppConfig::from_env();
    let bind_addr = app_config.bind_addr;
    let core = Arc::new(core_state::CoreState::with_config(app_config));

    let mut server = api::start_server(core, bind_addr).await?;
    tracing::info!(addr = %server.addr, "Listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    server.shutdown();
    Ok(())
}
