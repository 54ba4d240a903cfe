//! Tool framework for flow-pilot
//!
//! This crate provides the tool dispatch contract: declarative input/output
//! schemas, tool definitions bound to async handlers, the three-part result
//! envelope, the adapter for outbound JSON calls, and the registry that validates
//! and dispatches invocations.

pub mod envelope;
pub mod external;
pub mod registry;
pub mod schema;
pub mod tool;

pub use envelope::{Card, EnvelopeBuilder, RenderMode, ResultEnvelope};
pub use external::{ExternalCall, ExternalResponse, HttpExternalCall};
pub use registry::ToolRegistry;
pub use schema::SchemaDescriptor;
pub use tool::{Handler, Pricing, ToolDefinition, ToolInfo};
