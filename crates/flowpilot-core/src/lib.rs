//! Core types for flow-pilot
//!
//! This crate defines the values every tool invocation carries: who is calling
//! ([`CallerIdentity`]), the per-call ambient data ([`InvocationContext`]) and the
//! error taxonomy shared by the registry, handlers and the external call adapter.

pub mod context;
pub mod error;
pub mod identity;

pub use context::InvocationContext;
pub use error::{ExternalCallError, Result, ToolError, ValidationFailure};
pub use identity::CallerIdentity;
