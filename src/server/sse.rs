//! HTTP/SSE transport.
//!
//! Mounts an [`SseServer`] behind an axum router so that remote MCP clients
//! can connect via HTTP with Server-Sent Events streaming. Each inbound SSE
//! connection gets its own [`ScaffoldServer`] instance sharing the same
//! [`AppState`]; concurrent connection handling is the SDK's concern.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, ScaffoldServer};
use crate::{AppError, Result};

/// Handler for `GET /health`. Returns 200 OK with a plain-text body, useful
/// for probing liveness without initiating an MCP session.
async fn health() -> &'static str {
    "ok"
}

/// Start the HTTP/SSE MCP transport on the configured bind address and port.
///
/// # Errors
///
/// Returns `AppError::Config` if the server fails to bind and
/// `AppError::Mcp` if the HTTP server errors while running.
pub async fn serve_sse(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let bind = SocketAddr::new(state.config.bind_host, state.config.port);

    let config = SseServerConfig {
        bind,
        sse_path: "/sse".into(),
        post_path: "/message".into(),
        ct: ct.clone(),
        sse_keep_alive: None,
    };

    let (sse_server, router) = SseServer::new(config);
    let router = router.route("/health", get(health));

    let server_ct = {
        let state = Arc::clone(&state);
        sse_server.with_service(move || ScaffoldServer::new(Arc::clone(&state)))
    };

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind SSE on {bind}: {err}")))?;

    info!(%bind, "starting HTTP/SSE MCP transport");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
            server_ct.cancel();
        })
        .await
        .map_err(|err| AppError::Mcp(format!("SSE server error: {err}")))?;

    info!("HTTP/SSE MCP transport shut down");
    Ok(())
}
