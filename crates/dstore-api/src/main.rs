//! # dstore-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to a configurable port (default 8083)
//! only after bootstrap has succeeded.

use dstore_api::bootstrap;
use dstore_api::state::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;
    tracing::info!(variant = ?config.variant, backend = ?config.backend, "configuration loaded");

    let store = bootstrap::connect_store(config.backend).map_err(|e| {
        tracing::error!("Storage backend initialization failed: {e}");
        e
    })?;

    // The startup input must be stored before anything is served.
    let state = bootstrap::bootstrap(&config, store).await.map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    let app = dstore_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("dstore API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
