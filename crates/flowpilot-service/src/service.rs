//! The assembled Flow Pilot service

use flowpilot_core::{CallerIdentity, InvocationContext};
use flowpilot_tools::{ExternalCall, HttpExternalCall, ResultEnvelope, ToolInfo, ToolRegistry};
use flowpilot_utils::ServiceConfig;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::metadata::{ExampleQueries, ServiceMetadata};
use crate::tools::{
    add_to_notion::AddToNotionTool, calendar_event::CalendarEventTool,
    generate_audio::GenerateAudioTool, meeting_action_items::MeetingActionItemsTool,
    presentation::PresentationTool, query_database::QueryDatabaseTool,
    text_to_speech::TextToSpeechTool, zoom_meeting::ZoomMeetingTool,
};

/// Register every Flow Pilot tool, in catalog order
pub fn build_registry(
    call: Arc<dyn ExternalCall>,
    endpoints: &Endpoints,
) -> flowpilot_core::Result<ToolRegistry> {
    ToolRegistry::from_definitions([
        QueryDatabaseTool::new().definition(),
        MeetingActionItemsTool::new(call.clone(), &endpoints.meeting_action_items).definition(),
        AddToNotionTool::new(call.clone(), &endpoints.add_to_notion).definition(),
        CalendarEventTool::new(call.clone(), &endpoints.calendar_event).definition(),
        ZoomMeetingTool::new(call.clone(), &endpoints.zoom_meeting).definition(),
        PresentationTool::new(call.clone(), &endpoints.presentation).definition(),
        TextToSpeechTool::new(call.clone(), &endpoints.text_to_speech).definition(),
        GenerateAudioTool::new(call, &endpoints.generate_audio).definition(),
    ])
}

/// Metadata, example queries and the immutable tool registry
///
/// Cloning is cheap; clones share one registry.
#[derive(Debug, Clone)]
pub struct FlowPilotService {
    metadata: ServiceMetadata,
    example_queries: Vec<ExampleQueries>,
    registry: Arc<ToolRegistry>,
}

impl FlowPilotService {
    /// Assemble the service around an external call adapter
    pub fn new(call: Arc<dyn ExternalCall>, endpoints: &Endpoints) -> Result<Self> {
        let registry = build_registry(call, endpoints)?;
        info!("Registered {} tools", registry.len());

        Ok(Self {
            metadata: ServiceMetadata::flow_pilot(),
            example_queries: ExampleQueries::flow_pilot(),
            registry: Arc::new(registry),
        })
    }

    /// Assemble the service with the HTTP adapter and endpoints from configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let call = match config.request_timeout() {
            Some(timeout) => {
                debug!("Using request timeout of {:?}", timeout);
                HttpExternalCall::with_timeout(timeout)?
            }
            None => HttpExternalCall::new(),
        };
        let endpoints = Endpoints::from_config(config)?;

        Self::new(Arc::new(call), &endpoints)
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    pub fn example_queries(&self) -> &[ExampleQueries] {
        &self.example_queries
    }

    /// Public description of every tool, in registration order
    pub fn catalog(&self) -> Vec<ToolInfo> {
        self.registry.catalog()
    }

    /// Invoke a tool by id
    pub async fn invoke(
        &self,
        tool_id: &str,
        input: Value,
        caller: &CallerIdentity,
        context: &InvocationContext,
    ) -> flowpilot_core::Result<ResultEnvelope> {
        self.registry.invoke(tool_id, input, caller, context).await
    }
}
