//! Tool for adding a task to a Notion database
//!
//! Posts `{task, status, date}` to the Notion automation and reports the id and URL
//! of the page it created.

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, ExternalCall, ExternalResponse, Handler, Pricing, ResultEnvelope, ToolDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "add-to-notion";

#[derive(Debug, Serialize, Deserialize)]
struct NotionTaskParams {
    task: String,
    status: String,
    date: String,
}

/// Fields read back from the automation's response
#[derive(Debug, Default, PartialEq)]
struct NotionPage {
    /// `id`, empty when absent
    page_id: String,
    /// `url`, empty when absent
    url: String,
}

impl NotionPage {
    fn decode(response: &ExternalResponse) -> Self {
        Self {
            page_id: response.text_field("id"),
            url: response.text_field("url"),
        }
    }
}

/// Creates Notion task pages
pub struct AddToNotionTool {
    call: Arc<dyn ExternalCall>,
    endpoint: String,
}

impl AddToNotionTool {
    /// Create the handler
    pub fn new(call: Arc<dyn ExternalCall>, endpoint: impl Into<String>) -> Self {
        Self {
            call,
            endpoint: endpoint.into(),
        }
    }

    /// Input shape
    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for creating a Notion task")
            .required("task", schema::string("Task description"))
            .required("status", schema::string("Task status (e.g., doing, todo, done)"))
            .required("date", schema::string("Due date for the task"))
            .into()
    }

    /// Output shape
    pub fn output_schema() -> SchemaDescriptor {
        schema::object("Created Notion page details")
            .required("pageId", schema::string("ID of the created Notion page"))
            .required("url", schema::string("URL of the created Notion page"))
            .into()
    }

    /// Bind this handler into a tool definition
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Add to Notion",
            "Adds a new task to Notion database",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
        .with_pricing(Pricing::free())
    }
}

#[async_trait]
impl Handler for AddToNotionTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: NotionTaskParams = parse_input(ID, input)?;
        info!("Agent {} adding task to Notion: {}", caller.id(), params.task);

        let body = json!(params);
        let response = self.call.post(&self.endpoint, &body).await?;
        let page = NotionPage::decode(&response);

        let content = format!(
            "Successfully added task to Notion:\n\n- Task: {}\n- Status: {}\n- Due Date: {}\n\n[View in Notion]({})",
            params.task, params.status, params.date, page.url
        );

        ResultEnvelope::builder()
            .text(format!("Added task \"{}\" to Notion", params.task))
            .data(json!({
                "pageId": page.page_id,
                "url": page.url,
            }))
            .card(&Card::page("Task Added to Notion", content))
            .build(ID)
    }
}
