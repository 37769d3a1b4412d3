//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Application state creation
//! - Router creation (routes, CORS policy, request middleware)
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// Creates the application state, sets up the router with the configured
/// CORS policy, and starts the server with graceful shutdown handling.
///
/// # Errors
///
/// Returns an error if binding the listener fails or the server hits a
/// runtime error.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting Podacium API server...");

    let state = Arc::new(AppState::new());

    // Create router
    let app = routes::create_router(state, &config.cors.allowed_origins);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!(origins = ?config.cors.allowed_origins, "CORS origins configured");

    // Set up graceful shutdown
    let shutdown_signal = create_shutdown_signal();

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, which indicates the OS cannot
/// deliver shutdown signals at all.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
