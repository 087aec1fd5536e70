//! `echo` sample tool handler.
//!
//! Returns its input message, optionally uppercased. Exists to prove the
//! tool registry and dispatch path end to end.

use rmcp::model::{CallToolResult, Content};
use tracing::info;

use crate::capability::{ArgumentMap, BoxFuture, ToolHandler};

/// Input parameters for the `echo` tool.
#[derive(Debug, serde::Deserialize)]
struct EchoInput {
    /// Message to echo back.
    message: String,
    /// Uppercase the message before returning it.
    #[serde(default)]
    uppercase: bool,
}

/// Tool that echoes its input back to the caller.
pub struct EchoTool;

impl ToolHandler for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> Option<&str> {
        Some("Echo the provided message back, optionally uppercased.")
    }

    fn input_schema(&self) -> ArgumentMap {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "uppercase": { "type": "boolean", "default": false }
            },
            "required": ["message"]
        });
        match schema {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::default(),
        }
    }

    fn call(&self, args: ArgumentMap) -> BoxFuture<Result<CallToolResult, rmcp::ErrorData>> {
        Box::pin(async move {
            let input: EchoInput = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|err| {
                    rmcp::ErrorData::invalid_params(
                        format!("invalid echo parameters: {err}"),
                        None,
                    )
                })?;

            let text = if input.uppercase {
                input.message.to_uppercase()
            } else {
                input.message
            };

            info!(len = text.len(), "echo tool invoked");

            Ok(CallToolResult::success(vec![Content::text(text)]))
        })
    }
}
