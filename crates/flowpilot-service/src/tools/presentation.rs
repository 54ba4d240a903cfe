//! Tool for generating a presentation from meeting notes

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, Handler, ResultEnvelope, ToolDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "generate-presentation";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresentationParams {
    presentation_instructions: String,
}

pub struct PresentationTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl PresentationTool {
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for generating a presentation")
            .required(
                "presentationInstructions",
                schema::string("The presentation instructions"),
            )
            .into()
    }

    pub fn output_schema() -> SchemaDescriptor {
        schema::object("Generated presentation details")
            .required("presentationUrl", schema::string("URL to the generated presentation"))
            .into()
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Generate Presentation",
            "Generates a presentation from a Zoom meeting transcript",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

fn presentation_card(url: &str) -> Card {
    Card::page(
        "Presentation Generated",
        format!(
            "## Generated Presentation\n\n\
             Your presentation has been successfully generated from the meeting transcript. \
             You can view it below or [open in full screen]({url}).\n\n\
             ![Presentation]({url})\n\n\
             *Tip: Click the presentation and use arrow keys to navigate slides*"
        ),
    )
}

#[async_trait]
impl Handler for PresentationTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: PresentationParams = parse_input(ID, input)?;
        info!("Agent {} requested a presentation from transcript", caller.id());

        let response = self.call.post(&self.endpoint, &json!(params)).await?;
        let presentation_url = response.text_field("presentationUrl");

        ResultEnvelope::builder()
            .text("Generated presentation")
            .data(json!({"presentationUrl": presentation_url}))
            .card(&presentation_card(&presentation_url))
            .build(ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::stub::StubCall;
    use flowpilot_tools::ToolRegistry;

    #[tokio::test]
    async fn test_generates_presentation() {
        let stub = StubCall::replying(json!({"presentationUrl": "https://slides.test/p/9"}));
        let registry = ToolRegistry::from_definitions([
            PresentationTool::new(stub.clone(), "http://slides.test/run").definition(),
        ])
        .unwrap();

        let envelope = registry
            .invoke(
                ID,
                json!({"presentationInstructions": "Five slides, one per decision"}),
                &CallerIdentity::new("agent-2"),
                &InvocationContext::new(),
            )
            .await
            .unwrap();

        assert_eq!(envelope.text, "Generated presentation");
        assert_eq!(envelope.data["presentationUrl"], "https://slides.test/p/9");
        let content = envelope.ui["content"].as_str().unwrap();
        assert!(content.contains("[open in full screen](https://slides.test/p/9)"));
        assert!(content.contains("![Presentation](https://slides.test/p/9)"));
        assert_eq!(
            stub.requests()[0].1,
            json!({"presentationInstructions": "Five slides, one per decision"})
        );
    }
}
