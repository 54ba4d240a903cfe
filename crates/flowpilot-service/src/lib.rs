//! The Flow Pilot service
//!
//! Eight productivity tools (task tracking, meeting follow-up, calendar events,
//! presentations and audio) registered into one [`ToolRegistry`](flowpilot_tools::ToolRegistry)
//! alongside the service metadata advertised to callers.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowpilot_core::{CallerIdentity, InvocationContext};
//! use flowpilot_service::FlowPilotService;
//! use flowpilot_utils::ServiceConfig;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = FlowPilotService::from_config(&ServiceConfig::from_env()?)?;
//! let envelope = service
//!     .invoke(
//!         "create-calendar-event",
//!         json!({"task": "Team sync tomorrow at 10"}),
//!         &CallerIdentity::new("agent-1"),
//!         &InvocationContext::new(),
//!     )
//!     .await?;
//! println!("{}", envelope.text);
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod error;
pub mod metadata;
pub mod service;
pub mod tools;

pub use endpoints::Endpoints;
pub use error::{Result, ServiceError};
pub use metadata::{ExampleQueries, ServiceMetadata};
pub use service::{FlowPilotService, build_registry};
