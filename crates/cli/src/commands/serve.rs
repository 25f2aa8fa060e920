//! Serve command - run the HTTP API

use anyhow::{Context, Result};
use creator_studio_adapters::http::{AppState, RouterConfig, router};
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::args::ServeArgs;
use crate::commands::build_catalog;
use crate::config::AppConfig;

pub async fn execute(args: ServeArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let catalog = build_catalog(&config).await?;
    let state = AppState::new(catalog).with_database_url(config.storage.database_url());
    let app = router(
        state,
        &RouterConfig {
            cors_permissive: config.server.cors_permissive,
        },
    );

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    tracing::info!(
        address = %local_addr,
        backend = ?config.storage.backend,
        database = %config.storage.database_name,
        "Starting creator-studio server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
