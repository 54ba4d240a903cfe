//! Error types for tool registration and invocation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for flowpilot-core
pub type Result<T> = std::result::Result<T, ToolError>;

/// A single field-level schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Dot-joined path of the offending field (`$` for the root value)
    ///
    /// Field names are not escaped, so a name that itself contains `.` yields a path
    /// that cannot be told apart from a nested one.
    pub path: String,

    /// Human-readable reason
    pub reason: String,
}

impl ValidationFailure {
    /// Create a new validation failure
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Failure of an outbound call to an external collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalCallError {
    /// Connection, DNS, timeout or body-read failure
    #[error("transport error calling {url}: {message}")]
    Transport { url: String, message: String },

    /// The response body was not valid JSON
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ExternalCallError {
    /// Build a transport error
    pub fn transport(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Build a decode error
    pub fn decode(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Error type for tool registration and invocation
#[derive(Error, Debug)]
pub enum ToolError {
    /// Two tools share an identifier
    #[error("Tool '{0}' is already registered")]
    DuplicateIdentifier(String),

    /// No tool with this identifier
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Input did not satisfy the tool's input schema
    #[error("Invalid input for tool '{tool}': {}", join_failures(.failures))]
    InvalidInput {
        tool: String,
        failures: Vec<ValidationFailure>,
    },

    /// The handler's external call failed
    #[error("External call failed: {0}")]
    ExternalCallFailed(#[from] ExternalCallError),

    /// A handler produced an envelope without display text
    #[error("Result envelope for tool '{0}' has no text")]
    IncompleteEnvelope(String),
}

impl ToolError {
    /// Whether the error was caused by the caller's request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::InvalidInput { .. }
        )
    }

    /// Field failures carried by `InvalidInput`, empty for every other variant
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::InvalidInput { failures, .. } => failures,
            _ => &[],
        }
    }
}

fn join_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
