//! MCP server handler and shared application state.
//!
//! [`ScaffoldServer`] implements the `rmcp` [`ServerHandler`] trait by
//! consulting the capability registries at request time: `tools/call` looks
//! the tool up by name and dispatches, list operations enumerate each
//! registry, and unknown names surface as `invalid_params`.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    Annotated, CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
    PaginatedRequestParam, Prompt, ProtocolVersion, RawResource, ReadResourceRequestParam,
    ReadResourceResult, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use tracing::info_span;

use crate::config::ServerConfig;
use crate::registry::HandlerRegistries;

/// Shared state accessible by every MCP request handler.
pub struct AppState {
    /// Resolved server configuration.
    pub config: Arc<ServerConfig>,
    /// Tool, prompt, and resource registries.
    pub registries: HandlerRegistries,
}

impl AppState {
    /// Bundle configuration and registries into shared state.
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, registries: HandlerRegistries) -> Self {
        Self { config, registries }
    }
}

/// MCP server implementation backed by the handler registries.
#[derive(Clone)]
pub struct ScaffoldServer {
    state: Arc<AppState>,
}

impl ScaffoldServer {
    /// Create a new MCP server bound to shared application state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Access the shared application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    fn tool_listing(&self) -> Vec<Tool> {
        self.state
            .registries
            .tools
            .iter()
            .map(|handler| Tool {
                name: handler.name().to_owned().into(),
                title: None,
                description: handler.description().map(|d| d.to_owned().into()),
                input_schema: Arc::new(handler.input_schema()),
                output_schema: None,
                annotations: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    fn prompt_listing(&self) -> Vec<Prompt> {
        self.state
            .registries
            .prompts
            .iter()
            .map(|handler| Prompt::new(handler.name(), handler.description(), handler.arguments()))
            .collect()
    }

    fn resource_listing(&self) -> Vec<Annotated<RawResource>> {
        self.state
            .registries
            .resources
            .iter()
            .map(|handler| {
                Annotated::new(
                    RawResource {
                        uri: handler.uri().to_owned(),
                        name: handler.name().to_owned(),
                        title: None,
                        description: handler.description().map(str::to_owned),
                        mime_type: handler.mime_type().map(str::to_owned),
                        size: None,
                        icons: None,
                    },
                    None,
                )
            })
            .collect()
    }
}

impl ServerHandler for ScaffoldServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Scaffold MCP server. Register tools, prompts, and resources \
                 with the handler registries to extend it."
                    .to_owned(),
            ),
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("call_tool", tool = %request.name).entered();
        let lookup = self
            .state
            .registries
            .tools
            .lookup(&request.name)
            .map_err(rmcp::ErrorData::from);

        async move {
            let handler = lookup?;
            let args = request.arguments.unwrap_or_default();
            handler.call(args).await
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        let tools = self.tool_listing();

        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("get_prompt", prompt = %request.name).entered();
        let lookup = self
            .state
            .registries
            .prompts
            .lookup(&request.name)
            .map_err(rmcp::ErrorData::from);

        async move {
            let handler = lookup?;
            handler.render(request.arguments).await
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, rmcp::ErrorData>> + Send + '_ {
        let prompts = self.prompt_listing();

        std::future::ready(Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
        }))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("read_resource", uri = %request.uri).entered();
        let lookup = self
            .state
            .registries
            .resources
            .lookup(&request.uri)
            .map_err(rmcp::ErrorData::from);

        async move {
            let handler = lookup?;
            handler.read().await
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        let resources = self.resource_listing();

        std::future::ready(Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        }))
    }
}
