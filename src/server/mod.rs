//! MCP server layer: request handling and transport selection.

pub mod handler;
pub mod http;
pub mod sse;
pub mod transport;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::TransportKind;
use crate::Result;

pub use handler::{AppState, ScaffoldServer};

/// Serve the configured transport until the cancellation token fires.
///
/// Exactly one transport runs per process; the selection was resolved at
/// startup from `MCP_TRANSPORT` (or the config file).
///
/// # Errors
///
/// Propagates the selected transport's bind or serve failure.
pub async fn serve(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let kind = state.config.transport;
    info!(transport = %kind, "transport selected");

    match kind {
        TransportKind::Stdio => transport::serve_stdio(state, ct).await,
        TransportKind::Sse => sse::serve_sse(state, ct).await,
        TransportKind::Http => http::serve_http(state, ct).await,
    }
}
