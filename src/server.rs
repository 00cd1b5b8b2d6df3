//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory link table, wires the service and router, and runs
//! the Axum server until shutdown.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::memory::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The link table starts empty and lives exactly as long as this call:
/// nothing is persisted across restarts.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, binding fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository,
        config.service_host.clone(),
        config.service_port,
    ));

    let state = AppState::new(link_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when Ctrl-C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
