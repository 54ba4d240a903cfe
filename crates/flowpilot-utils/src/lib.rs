//! Shared utilities for flow-pilot
//!
//! This crate provides logging setup and the environment-driven service
//! configuration used by the flow-pilot binaries.

pub mod config;
pub mod logging;

pub use config::{ConfigError, ServiceConfig};
pub use logging::init_tracing;
