//! Placeholder database query tool
//!
//! Makes no external call; it only acknowledges the query.

use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use flowpilot_tools::schema::{self, SchemaDescriptor};
use flowpilot_tools::{Card, Handler, ResultEnvelope, ToolDefinition};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::parse_input;

pub const ID: &str = "query-database";

const QUERYING: &str = "Querying the database...";

#[derive(Debug, Deserialize)]
struct QueryParams {
    query: String,
}

#[derive(Debug, Default)]
pub struct QueryDatabaseTool;

impl QueryDatabaseTool {
    pub fn new() -> Self {
        Self
    }

    pub fn input_schema() -> SchemaDescriptor {
        schema::object("Input parameters for the database query")
            .required("query", schema::string("The database query to execute"))
            .into()
    }

    pub fn output_schema() -> SchemaDescriptor {
        schema::string("Query result message")
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(
            ID,
            "Query Database",
            "Performs a database query operation",
            Arc::new(self),
        )
        .with_input(Self::input_schema())
        .with_output(Self::output_schema())
    }
}

#[async_trait]
impl Handler for QueryDatabaseTool {
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        _context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let params: QueryParams = parse_input(ID, input)?;
        info!("Agent {} querying database: {}", caller.id(), params.query);

        ResultEnvelope::builder()
            .text(QUERYING)
            .data(json!(QUERYING))
            .card(&Card::page("Database Query", QUERYING))
            .build(ID)
    }
}
