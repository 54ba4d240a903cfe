//! Tool registry: lookup, validation and dispatch

use crate::envelope::ResultEnvelope;
use crate::tool::{ToolDefinition, ToolInfo};
use flowpilot_core::{CallerIdentity, InvocationContext, Result, ToolError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Ordered, immutable-once-shared collection of tools
///
/// Tools are registered during startup; afterwards the registry is typically wrapped
/// in an `Arc` and only read. Every [`invoke`](Self::invoke) is independent: no
/// retries, no caching, no shared mutable state.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions, failing on the first duplicate identifier
    pub fn from_definitions(definitions: impl IntoIterator<Item = ToolDefinition>) -> Result<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a tool
    ///
    /// Fails with [`ToolError::DuplicateIdentifier`] when the identifier is taken; the
    /// existing registration is left untouched.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<()> {
        if self.index.contains_key(definition.id()) {
            return Err(ToolError::DuplicateIdentifier(definition.id().to_string()));
        }

        debug!("Registering tool: {}", definition.id());
        self.index
            .insert(definition.id().to_string(), self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// Get a tool by identifier
    pub fn get(&self, id: &str) -> Option<&ToolDefinition> {
        self.index.get(id).map(|&i| &self.tools[i])
    }

    /// Whether a tool with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All tools in registration order
    pub fn list(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Catalog entries in registration order
    pub fn catalog(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(ToolDefinition::info).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool
    ///
    /// The input is validated before the handler runs; a handler never sees input its
    /// tool declared invalid. The handler's envelope is returned unchanged. Output
    /// validation is advisory and only logged.
    pub async fn invoke(
        &self,
        id: &str,
        input: Value,
        caller: &CallerIdentity,
        context: &InvocationContext,
    ) -> Result<ResultEnvelope> {
        let tool = self
            .get(id)
            .ok_or_else(|| ToolError::UnknownTool(id.to_string()))?;

        if let Err(failures) = tool.input_schema().validate(&input) {
            warn!(
                "Rejected input for tool '{}' (trace {}): {} failure(s)",
                id,
                context.trace_id(),
                failures.len()
            );
            return Err(ToolError::InvalidInput {
                tool: id.to_string(),
                failures,
            });
        }

        info!(
            "Agent {} invoking tool '{}' (trace {})",
            caller.id(),
            id,
            context.trace_id()
        );

        let envelope = tool.handler().handle(input, caller, context).await?;

        if let Err(failures) = tool.output_schema().validate(&envelope.data) {
            for failure in &failures {
                warn!("Tool '{}' returned data outside its output schema: {}", id, failure);
            }
        }

        Ok(envelope)
    }
}
