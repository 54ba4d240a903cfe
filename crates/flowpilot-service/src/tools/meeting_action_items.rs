//! Tool for fetching the action items of the most recent meeting

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, Handler, ResultEnvelope, ToolDefinition};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "get-meeting-action-items";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionItemsParams {
    #[serde(default)]
    meeting_title: Option<String>,
}

/// Retrieves follow-up instructions for the latest meeting
pub struct MeetingActionItemsTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl MeetingActionItemsTool {
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    /// No input is required; a meeting title only changes the summary text
    pub fn input_schema() -> SchemaDescriptor {
        schema::object("No input required")
            .optional("meetingTitle", schema::string("Title of the meeting"))
            .into()
    }

    pub fn output_schema() -> SchemaDescriptor {
        schema::object("Meeting action items and follow-up details")
            .required("actionItems", schema::string("Description of meeting action items"))
            .into()
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Get Meeting Action Items",
            "Get action items from my most recent meeting",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

#[async_trait]
impl Handler for MeetingActionItemsTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: ActionItemsParams = parse_input(ID, input)?;
        info!("Agent {} requested meeting action items", caller.id());

        let response = self.call.post(&self.endpoint, &json!({})).await?;
        let action_items = response.text_field("instructions");

        let text = match &params.meeting_title {
            Some(title) => format!("Retrieved action items for {title}"),
            None => "Retrieved action items for your most recent meeting".to_string(),
        };

        ResultEnvelope::builder()
            .text(text)
            .data(json!({"actionItems": action_items}))
            .card(&Card::page(
                "👨‍💻 Orchestrator Agent:",
                format!("## Instructions\n{action_items}"),
            ))
            .build(ID)
    }
}
