//! # repohelperd — repohelper daemon
//!
//! Composition root that wires the HTTP adapter together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Read the SPA shell from the assets directory
//! - Build the axum router and bind to a TCP port
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the server-side adapters.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use repohelper_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// The shell document could not be loaded at startup.
#[derive(Debug, thiserror::Error)]
#[error("failed to read SPA shell at {}", path.display())]
struct ShellError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let shell_path = config.shell_path();
    let shell = tokio::fs::read(&shell_path)
        .await
        .map_err(|source| ShellError {
            path: shell_path.clone(),
            source,
        })?;
    tracing::debug!(path = %shell_path.display(), bytes = shell.len(), "loaded spa shell");

    let state = AppState::new(shell, config.assets.dir.clone());
    let app = repohelper_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        assets = %config.assets.dir.display(),
        "repohelperd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("repohelperd stopped");
    Ok(())
}

/// Resolve once SIGINT (or SIGTERM on unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
