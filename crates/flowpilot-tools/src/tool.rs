//! Tool definitions and the handler trait

use crate::envelope::ResultEnvelope;
use crate::schema::SchemaDescriptor;
use async_trait::async_trait;
use flowpilot_core::{CallerIdentity, InvocationContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Logic behind a tool
///
/// A handler is a single-shot unit of work: it receives input that already passed
/// the tool's input schema, may perform at most one external call, and returns a
/// [`ResultEnvelope`]. Handlers never touch the registry or call other handlers.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Execute the tool
    ///
    /// # Arguments
    ///
    /// * `input` - Validated tool input
    /// * `caller` - The invoking agent
    /// * `context` - Per-invocation ambient data
    async fn handle(
        &self,
        input: Value,
        caller: &CallerIdentity,
        context: &InvocationContext,
    ) -> Result<ResultEnvelope>;
}

/// Pricing annotation advertised with a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub price_per_use: f64,
    pub currency: String,
}

impl Pricing {
    /// A per-use price in the given currency
    pub fn per_use(price_per_use: f64, currency: impl Into<String>) -> Self {
        Self {
            price_per_use,
            currency: currency.into(),
        }
    }

    /// Free of charge, priced in USD
    pub fn free() -> Self {
        Self::per_use(0.0, "USD")
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::free()
    }
}

/// A named, schema-described tool bound to its handler
///
/// Built once at startup and immutable afterwards.
#[derive(Clone)]
pub struct ToolDefinition {
    id: String,
    name: String,
    description: String,
    input_schema: SchemaDescriptor,
    output_schema: SchemaDescriptor,
    pricing: Pricing,
    handler: Arc<dyn Handler>,
}

impl ToolDefinition {
    /// Create a definition with empty input/output schemas and free pricing
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            input_schema: SchemaDescriptor::empty_object(""),
            output_schema: SchemaDescriptor::empty_object(""),
            pricing: Pricing::free(),
            handler,
        }
    }

    /// Set the input schema
    pub fn with_input(mut self, schema: impl Into<SchemaDescriptor>) -> Self {
        self.input_schema = schema.into();
        self
    }

    /// Set the output schema
    pub fn with_output(mut self, schema: impl Into<SchemaDescriptor>) -> Self {
        self.output_schema = schema.into();
        self
    }

    /// Set the pricing annotation
    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Stable identifier used for lookup
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &SchemaDescriptor {
        &self.input_schema
    }

    pub fn output_schema(&self) -> &SchemaDescriptor {
        &self.output_schema
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// The bound handler
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Catalog entry for discovery
    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema.to_json_schema(),
            output_schema: self.output_schema.to_json_schema(),
            pricing: self.pricing.clone(),
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("pricing", &self.pricing)
            .finish_non_exhaustive()
    }
}

/// Serializable catalog entry advertised to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
    pub pricing: Pricing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Handler for Echo {
        async fn handle(
            &self,
            input: Value,
            _caller: &CallerIdentity,
            _context: &InvocationContext,
        ) -> Result<ResultEnvelope> {
            ResultEnvelope::builder().text("echo").data(input).build("echo")
        }
    }

    #[test]
    fn test_defaults() {
        let tool = ToolDefinition::new("echo", "Echo", "Echoes its input", Arc::new(Echo));

        assert_eq!(tool.id(), "echo");
        assert!(tool.input_schema().is_empty_object());
        assert!(tool.output_schema().is_empty_object());
        assert_eq!(tool.pricing(), &Pricing::free());
    }

    #[test]
    fn test_info_serialization() {
        let tool = ToolDefinition::new("echo", "Echo", "Echoes its input", Arc::new(Echo))
            .with_input(schema::object("Echo input").required("text", schema::string("Text")))
            .with_output(schema::string("Echoed text"))
            .with_pricing(Pricing::per_use(0.5, "EUR"));

        let info = serde_json::to_value(tool.info()).unwrap();

        assert_eq!(info["id"], "echo");
        assert_eq!(info["inputSchema"]["required"], json!(["text"]));
        assert_eq!(info["outputSchema"]["type"], "string");
        assert_eq!(info["pricing"], json!({"pricePerUse": 0.5, "currency": "EUR"}));
    }

    #[tokio::test]
    async fn test_handler_through_definition() {
        let tool = ToolDefinition::new("echo", "Echo", "", Arc::new(Echo));
        let envelope = tool
            .handler()
            .handle(json!({"a": 1}), &CallerIdentity::new("c"), &InvocationContext::new())
            .await
            .unwrap();

        assert_eq!(envelope.data, json!({"a": 1}));
        assert!(format!("{tool:?}").contains("echo"));
    }
}
