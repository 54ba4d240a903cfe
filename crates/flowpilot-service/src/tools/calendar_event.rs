//! Tool for creating a calendar event

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, Handler, ResultEnvelope, ToolDefinition};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "create-calendar-event";

#[derive(Debug, Deserialize)]
struct CalendarEventParams {
    task: String,
}

/// Creates calendar events from a short description
pub struct CalendarEventTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl CalendarEventTool {
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for creating a calendar event")
            .required("task", schema::string("Event description or title"))
            .into()
    }

    pub fn output_schema() -> SchemaDescriptor {
        schema::object("Calendar event details")
            .required("calendarURL", schema::string("URL to the created calendar event"))
            .into()
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Create Calendar Event",
            "Creates a new calendar event",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

#[async_trait]
impl Handler for CalendarEventTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: CalendarEventParams = parse_input(ID, input)?;
        info!("Agent {} creating calendar event: {}", caller.id(), params.task);

        let response = self
            .call
            .post(&self.endpoint, &json!({"task": params.task}))
            .await?;
        let calendar_url = response.text_field("calendarURL");

        let content = format!(
            "Successfully created calendar event:\n\n- Event: {}\n\n[Add to Calendar]({})",
            params.task, calendar_url
        );

        ResultEnvelope::builder()
            .text(format!("Created calendar event for \"{}\"", params.task))
            .data(json!({"calendarURL": calendar_url}))
            .card(&Card::page("Calendar Event Created", content))
            .build(ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::stub::StubCall;
    use flowpilot_core::{ExternalCallError, ToolError};
    use flowpilot_tools::ToolRegistry;

    #[tokio::test]
    async fn test_creates_event() {
        let stub = StubCall::replying(json!({"calendarURL": "https://cal.test/e/1"}));
        let registry = ToolRegistry::from_definitions([
            CalendarEventTool::new(stub.clone(), "http://calendar.test/run").definition(),
        ])
        .unwrap();

        let envelope = registry
            .invoke(
                ID,
                json!({"task": "Team sync tomorrow at 10"}),
                &CallerIdentity::new("agent-7"),
                &InvocationContext::new(),
            )
            .await
            .unwrap();

        assert_eq!(envelope.text, "Created calendar event for \"Team sync tomorrow at 10\"");
        assert_eq!(envelope.data, json!({"calendarURL": "https://cal.test/e/1"}));
        assert_eq!(stub.requests()[0].1, json!({"task": "Team sync tomorrow at 10"}));
    }

    #[tokio::test]
    async fn test_decode_failure_propagates() {
        let stub = StubCall::failing(ExternalCallError::decode(
            "http://calendar.test/run",
            "expected value at line 1 column 1",
        ));
        let registry = ToolRegistry::from_definitions([
            CalendarEventTool::new(stub, "http://calendar.test/run").definition(),
        ])
        .unwrap();

        let err = registry
            .invoke(
                ID,
                json!({"task": "x"}),
                &CallerIdentity::new("agent-7"),
                &InvocationContext::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ToolError::ExternalCallFailed(ExternalCallError::Decode { .. })
        ));
    }
}
