//! `summarize` sample prompt handler.
//!
//! Renders a summarization instruction from a required `topic` argument and
//! an optional `style`. Exists to prove the prompt registry and render path.

use rmcp::model::{GetPromptResult, PromptArgument, PromptMessage, PromptMessageRole};

use crate::capability::{ArgumentMap, BoxFuture, PromptHandler};

/// Prompt arguments accepted by `summarize`.
#[derive(Debug, serde::Deserialize)]
struct SummarizeArgs {
    /// Subject of the summary.
    topic: String,
    /// Optional tone, e.g. "bullet points" or "one paragraph".
    style: Option<String>,
}

/// Prompt template producing a summarization instruction.
pub struct SummarizePrompt;

impl PromptHandler for SummarizePrompt {
    fn name(&self) -> &str {
        "summarize"
    }

    fn description(&self) -> Option<&str> {
        Some("Ask the model to summarize a topic in an optional style.")
    }

    fn arguments(&self) -> Option<Vec<PromptArgument>> {
        Some(vec![
            PromptArgument {
                name: "topic".to_owned(),
                title: None,
                description: Some("Subject of the summary.".to_owned()),
                required: Some(true),
            },
            PromptArgument {
                name: "style".to_owned(),
                title: None,
                description: Some("Desired tone or format.".to_owned()),
                required: Some(false),
            },
        ])
    }

    fn render(
        &self,
        args: Option<ArgumentMap>,
    ) -> BoxFuture<Result<GetPromptResult, rmcp::ErrorData>> {
        Box::pin(async move {
            let args: SummarizeArgs =
                serde_json::from_value(serde_json::Value::Object(args.unwrap_or_default()))
                    .map_err(|err| {
                        rmcp::ErrorData::invalid_params(
                            format!("invalid summarize arguments: {err}"),
                            None,
                        )
                    })?;

            let text = match args.style {
                Some(style) => format!(
                    "Summarize the following topic as {style}: {topic}",
                    topic = args.topic
                ),
                None => format!("Summarize the following topic: {}", args.topic),
            };

            Ok(GetPromptResult {
                description: Some("Summarization instruction".to_owned()),
                messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
            })
        })
    }
}
