//! Tool for converting text to speech

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, Handler, ResultEnvelope, ToolDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "text-to-speech";

#[derive(Debug, Serialize, Deserialize)]
struct AudioParams {
    text: String,
}

pub struct TextToSpeechTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl TextToSpeechTool {
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for text-to-speech conversion")
            .required("text", schema::string("The text to convert to speech"))
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
            "Text to Speech",
            "Generates audio from text input with customizable voices and styles",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

#[async_trait]
impl Handler for TextToSpeechTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: AudioParams = parse_input(ID, input)?;
        info!("Agent {} converting text to speech ({} chars)", caller.id(), params.text.len());

        let response = self.call.post(&self.endpoint, &json!(params)).await?;
        let audio_url = response.text_field("audioUrl");

        ResultEnvelope::builder()
            .text("Converted text to speech")
            .data(json!({"audioUrl": audio_url}))
            .card(&Card::page(
                "Text to Speech",
                format!("Your text has been converted to speech. Listen below:\n\n[Download Audio]({audio_url})"),
            ))
            .build(ID)
    }
}
