//! Handler capability contracts.
//!
//! A handler is anything registered with the server: a tool, a prompt, or a
//! resource. Each contract is a trait rather than a base class: a handler
//! supplies its name, its input schema, and an execution method, and the
//! server consults the registry at request time to dispatch to it.
//!
//! Handlers validate their own input by deserializing the raw argument map
//! with `serde` and surfacing failures as `invalid_params`.

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{
    CallToolResult, GetPromptResult, PromptArgument, ReadResourceResult,
};

/// Boxed future returned by dyn-dispatched handler methods.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Raw JSON argument map as delivered by the MCP request.
pub type ArgumentMap = serde_json::Map<String, serde_json::Value>;

/// Contract for a callable tool.
pub trait ToolHandler: Send + Sync {
    /// Unique tool name within the tool registry.
    fn name(&self) -> &str;

    /// Human-readable description advertised to clients.
    fn description(&self) -> Option<&str> {
        None
    }

    /// JSON schema object describing the accepted parameters.
    fn input_schema(&self) -> ArgumentMap;

    /// Execute the tool against validated input.
    fn call(&self, args: ArgumentMap) -> BoxFuture<Result<CallToolResult, rmcp::ErrorData>>;
}

/// Contract for a prompt template.
pub trait PromptHandler: Send + Sync {
    /// Unique prompt name within the prompt registry.
    fn name(&self) -> &str;

    /// Human-readable description advertised to clients.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Declared template arguments, if any.
    fn arguments(&self) -> Option<Vec<PromptArgument>> {
        None
    }

    /// Render the prompt into MCP messages.
    fn render(
        &self,
        args: Option<ArgumentMap>,
    ) -> BoxFuture<Result<GetPromptResult, rmcp::ErrorData>>;
}

/// Contract for a readable resource.
pub trait ResourceHandler: Send + Sync {
    /// Resource URI; serves as the unique name within the resource registry.
    fn uri(&self) -> &str;

    /// Human-readable resource name.
    fn name(&self) -> &str;

    /// Human-readable description advertised to clients.
    fn description(&self) -> Option<&str> {
        None
    }

    /// MIME type of the resource contents.
    fn mime_type(&self) -> Option<&str> {
        None
    }

    /// Read the resource contents.
    fn read(&self) -> BoxFuture<Result<ReadResourceResult, rmcp::ErrorData>>;
}
