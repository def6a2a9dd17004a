//! HTTP server initialization and runtime setup.
//!
//! Handles the connection pool, migrations, application state and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{self, PoolSettings};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::highlight;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Application service as served: the router behind trailing-slash
/// normalization, so `/abc/` resolves like `/abc`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (with a connectivity ping) and schema migrations
/// - Application state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened, pinged or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect_and_migrate(&config.database_url, PoolSettings::from(&config))
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database, schema up to date");

    let state = AppState::new(
        Arc::new(pool),
        &config.public_host,
        config.require_auth_token,
    );

    let app = app(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "HTTP server listening on {}",
        highlight::value(&format!("http://{addr}"))
    );

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
