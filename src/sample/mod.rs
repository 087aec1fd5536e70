//! Sample handlers demonstrating each capability namespace.
//!
//! These are the scaffold's starting points: copy one, rename it, and
//! register your own handler alongside (or instead of) it in `main.rs`.

pub mod echo;
pub mod server_info;
pub mod summarize;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::registry::HandlerRegistries;
use crate::Result;

/// Build registries pre-populated with the sample handlers.
///
/// # Errors
///
/// Returns `AppError::DuplicateName` if two samples claim the same name,
/// which would indicate a bug in this module.
pub fn default_registries(config: &Arc<ServerConfig>) -> Result<HandlerRegistries> {
    let mut registries = HandlerRegistries::new();
    registries.register_tool(Arc::new(echo::EchoTool))?;
    registries.register_prompt(Arc::new(summarize::SummarizePrompt))?;
    registries.register_resource(Arc::new(server_info::ServerInfoResource::new(Arc::clone(
        config,
    ))))?;
    Ok(registries)
}
