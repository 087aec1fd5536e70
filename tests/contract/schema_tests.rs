//! Contract tests pinning the sample handlers' advertised schemas.

use mcp_scaffold::capability::{PromptHandler, ToolHandler};
use mcp_scaffold::sample::echo::EchoTool;
use mcp_scaffold::sample::summarize::SummarizePrompt;

#[test]
fn echo_schema_is_an_object_schema() {
    let schema = serde_json::Value::Object(EchoTool.input_schema());

    assert_eq!(schema["type"], "object");
    assert!(schema["properties"]["message"].is_object());
    assert!(schema["properties"]["uppercase"].is_object());
}

#[test]
fn echo_schema_message_is_string_typed() {
    let schema = serde_json::Value::Object(EchoTool.input_schema());

    assert_eq!(schema["properties"]["message"]["type"], "string");
    assert_eq!(schema["properties"]["uppercase"]["type"], "boolean");
}

#[test]
fn summarize_declares_both_arguments() {
    let arguments = SummarizePrompt.arguments().expect("arguments declared");

    let names: Vec<&str> = arguments.iter().map(|a| a.name.as_str()).collect();
    assert!(names.contains(&"topic"));
    assert!(names.contains(&"style"));

    let style = arguments
        .iter()
        .find(|a| a.name == "style")
        .expect("style argument");
    assert_eq!(style.required, Some(false));
}
