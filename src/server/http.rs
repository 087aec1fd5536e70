//! Streamable HTTP transport.
//!
//! Mounts the SDK's [`StreamableHttpService`] behind an axum router at
//! `/mcp`. Session management is delegated to the SDK's local session
//! manager; like the SSE transport, each session gets a fresh
//! [`ScaffoldServer`] over the shared [`AppState`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, ScaffoldServer};
use crate::{AppError, Result};

async fn health() -> &'static str {
    "ok"
}

/// Start the streamable HTTP MCP transport on the configured bind address
/// and port.
///
/// # Errors
///
/// Returns `AppError::Config` if the server fails to bind and
/// `AppError::Mcp` if the HTTP server errors while running.
pub async fn serve_http(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let bind = SocketAddr::new(state.config.bind_host, state.config.port);

    let service = {
        let state = Arc::clone(&state);
        StreamableHttpService::new(
            move || Ok(ScaffoldServer::new(Arc::clone(&state))),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        )
    };

    let router = axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", get(health));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind HTTP on {bind}: {err}")))?;

    info!(%bind, "starting streamable HTTP MCP transport");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
        })
        .await
        .map_err(|err| AppError::Mcp(format!("HTTP server error: {err}")))?;

    info!("streamable HTTP MCP transport shut down");
    Ok(())
}
