//! Contract tests for the default sample registries.
//!
//! A scaffold fork that renames or removes a sample handler should fail
//! here, making the change deliberate.

use std::sync::Arc;

use mcp_scaffold::config::ServerConfig;
use mcp_scaffold::sample;
use mcp_scaffold::sample::server_info::SERVER_INFO_URI;

fn registries() -> mcp_scaffold::registry::HandlerRegistries {
    let config = Arc::new(ServerConfig::default());
    sample::default_registries(&config).expect("samples register cleanly")
}

#[test]
fn default_registries_expose_one_handler_per_namespace() {
    let registries = registries();

    assert_eq!(registries.tools.len(), 1);
    assert_eq!(registries.prompts.len(), 1);
    assert_eq!(registries.resources.len(), 1);
}

#[test]
fn echo_tool_is_registered() {
    let registries = registries();

    let tool = registries.tools.lookup("echo").expect("echo registered");
    assert_eq!(tool.name(), "echo");
    assert!(tool.description().is_some());
}

#[test]
fn summarize_prompt_is_registered() {
    let registries = registries();

    let prompt = registries
        .prompts
        .lookup("summarize")
        .expect("summarize registered");
    assert_eq!(prompt.name(), "summarize");
}

#[test]
fn server_info_resource_is_registered_by_uri() {
    let registries = registries();

    let resource = registries
        .resources
        .lookup(SERVER_INFO_URI)
        .expect("server-info registered");
    assert_eq!(resource.uri(), SERVER_INFO_URI);
    assert_eq!(resource.name(), "Server Info");
}

#[test]
fn unknown_tool_lookup_fails() {
    let registries = registries();

    assert!(registries.tools.lookup("does-not-exist").is_err());
}
