//! The Flow Pilot tools
//!
//! Every tool follows the same shape: a typed input decoded from the validated JSON,
//! at most one POST to its endpoint, an explicit decode of the response fields it
//! needs, and a card-style envelope.

pub mod add_to_notion;
pub mod calendar_event;
pub mod generate_audio;
pub mod meeting_action_items;
pub mod presentation;
pub mod query_database;
pub mod text_to_speech;
pub mod zoom_meeting;

#[cfg(test)]
pub(crate) mod stub;

use flowpilot_core::{Result, ToolError, ValidationFailure};
use flowpilot_tools::schema::ROOT_PATH;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode validated input into a tool's typed parameters
pub(crate) fn parse_input<T: DeserializeOwned>(tool: &str, input: Value) -> Result<T> {
    serde_json::from_value(input).map_err(|e| ToolError::InvalidInput {
        tool: tool.to_string(),
        failures: vec![ValidationFailure::new(ROOT_PATH, e.to_string())],
    })
}
