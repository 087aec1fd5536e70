//! `scaffold://server-info` sample resource handler.
//!
//! Exposes the resolved server configuration as a JSON resource so a
//! connected client can inspect what it is talking to.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, ResourceContents};
use serde_json::json;

use crate::capability::{BoxFuture, ResourceHandler};
use crate::config::ServerConfig;

/// URI under which the server-info resource is registered.
pub const SERVER_INFO_URI: &str = "scaffold://server-info";

/// Resource reporting the running server's configuration.
pub struct ServerInfoResource {
    config: Arc<ServerConfig>,
}

impl ServerInfoResource {
    /// Bind the resource to the resolved configuration.
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }
}

impl ResourceHandler for ServerInfoResource {
    fn uri(&self) -> &str {
        SERVER_INFO_URI
    }

    fn name(&self) -> &str {
        "Server Info"
    }

    fn description(&self) -> Option<&str> {
        Some("The running server's name, transport, and network settings.")
    }

    fn mime_type(&self) -> Option<&str> {
        Some("application/json")
    }

    fn read(&self) -> BoxFuture<Result<ReadResourceResult, rmcp::ErrorData>> {
        let config = Arc::clone(&self.config);
        Box::pin(async move {
            let body = json!({
                "server_name": config.server_name,
                "transport": config.transport.to_string(),
                "port": config.port,
                "bind_host": config.bind_host.to_string(),
            });

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(
                    body.to_string(),
                    SERVER_INFO_URI,
                )],
            })
        })
    }
}
