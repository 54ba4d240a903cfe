//! Tool for generating audio from text

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, Handler, ResultEnvelope, ToolDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "generate-audio";

#[derive(Debug, Serialize, Deserialize)]
struct AudioParams {
    text: String,
}

pub struct GenerateAudioTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl GenerateAudioTool {
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for audio generation")
            .required("text", schema::string("The text to convert to audio"))
            .into()
    }

    pub fn output_schema() -> SchemaDescriptor {
        schema::object("Generated audio details")
            .required("audioUrl", schema::string("URL to the generated audio file"))
            .into()
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Generate Audio",
            "Generates audio from text input with customizable voices and styles",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

#[async_trait]
impl Handler for GenerateAudioTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: AudioParams = parse_input(ID, input)?;
        info!("Agent {} generating audio ({} chars)", caller.id(), params.text.len());

        let response = self.call.post(&self.endpoint, &json!(params)).await?;
        let audio_url = response.text_field("audioUrl");

        ResultEnvelope::builder()
            .text("Generated audio")
            .data(json!({"audioUrl": audio_url}))
            .card(&Card::page(
                "Audio Generated",
                format!("Your audio has been successfully generated. Listen below:\n\n[Download Audio]({audio_url})"),
            ))
            .build(ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::stub::StubCall;
    use flowpilot_core::ToolError;
    use flowpilot_tools::ToolRegistry;

    fn registry(stub: Arc<StubCall>) -> ToolRegistry {
        ToolRegistry::from_definitions([GenerateAudioTool::new(stub, "http://audio.test/run").definition()])
            .unwrap()
    }

    #[tokio::test]
    async fn test_generates_audio() {
        let stub = StubCall::replying(json!({"audioUrl": "https://audio.test/b.mp3"}));
        let envelope = registry(stub)
            .invoke(
                ID,
                json!({"text": "Recap of the sprint"}),
                &CallerIdentity::new("agent-4"),
                &InvocationContext::new(),
            )
            .await
            .unwrap();

        assert_eq!(envelope.text, "Generated audio");
        assert_eq!(envelope.ui["title"], "Audio Generated");
    }

    #[tokio::test]
    async fn test_numeric_audio_url_is_stringified() {
        let stub = StubCall::replying(json!({"audioUrl": 42}));
        let envelope = registry(stub)
            .invoke(
                ID,
                json!({"text": "x"}),
                &CallerIdentity::new("agent-4"),
                &InvocationContext::new(),
            )
            .await
            .unwrap();

        assert_eq!(envelope.data, json!({"audioUrl": "42"}));
    }

    #[tokio::test]
    async fn test_missing_text_rejected() {
        let stub = StubCall::replying(json!({}));
        let err = registry(stub.clone())
            .invoke(ID, json!({}), &CallerIdentity::new("agent-4"), &InvocationContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidInput { .. }));
        assert!(stub.requests().is_empty());
    }
}
