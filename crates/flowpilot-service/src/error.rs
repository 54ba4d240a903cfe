//! Error types for assembling the Flow Pilot service

use flowpilot_core::{ExternalCallError, ToolError};
use flowpilot_utils::ConfigError;
use thiserror::Error;

/// Errors raised while building the service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Tool registration failed
    #[error("Tool registration failed: {0}")]
    Tool(#[from] ToolError),

    /// Configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP adapter could not be created
    #[error("HTTP client error: {0}")]
    Client(#[from] ExternalCallError),
}

/// Result type alias for service assembly
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::from(ToolError::DuplicateIdentifier("generate-audio".to_string()));
        assert_eq!(
            err.to_string(),
            "Tool registration failed: Tool 'generate-audio' is already registered"
        );

        let err = ServiceError::from(ConfigError::Missing("DAIN_API_KEY"));
        assert!(err.to_string().contains("DAIN_API_KEY"));
    }
}
