//! Per-invocation context
//!
//! An [`InvocationContext`] is created fresh for every tool call and dropped once the
//! handler returns. It carries a correlation id plus a free-form key-value store the
//! transport layer can use to pass request metadata down to handlers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Well-known context keys
pub mod keys {
    /// Session the invocation belongs to
    pub const SESSION_ID: &str = "session_id";
    /// Origin of the inbound request (e.g. a host name)
    pub const ORIGIN: &str = "origin";
}

/// Ambient data for a single tool invocation
///
/// # Example
///
/// ```
/// use flowpilot_core::InvocationContext;
///
/// let ctx = InvocationContext::with_trace_id("trace-1").with_session_id("session-123");
///
/// assert_eq!(ctx.trace_id(), "trace-1");
/// assert_eq!(ctx.session_id(), Some("session-123"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationContext {
    trace_id: String,
    data: HashMap<String, serde_json::Value>,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationContext {
    /// Create a context with a freshly generated trace id
    pub fn new() -> Self {
        Self::with_trace_id(Uuid::new_v4().to_string())
    }

    /// Create a context that reuses a caller-supplied trace id
    pub fn with_trace_id(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            data: HashMap::new(),
        }
    }

    /// Set the session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
        self
    }

    /// Set the request origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.insert(keys::ORIGIN, serde_json::json!(origin.into()));
        self
    }

    /// Correlation id of this invocation
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Get the session ID
    pub fn session_id(&self) -> Option<&str> {
        self.get(keys::SESSION_ID).and_then(|v| v.as_str())
    }

    /// Get the request origin
    pub fn origin(&self) -> Option<&str> {
        self.get(keys::ORIGIN).and_then(|v| v.as_str())
    }

    /// Insert a value into the context
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Check if a key exists in the context
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of key-value entries (the trace id is not counted)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the key-value store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_trace_ids_differ() {
        let a = InvocationContext::new();
        let b = InvocationContext::new();

        assert_ne!(a.trace_id(), b.trace_id());
        assert!(a.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let ctx = InvocationContext::with_trace_id("trace-9")
            .with_session_id("sess-1")
            .with_origin("agent.example");

        assert_eq!(ctx.trace_id(), "trace-9");
        assert_eq!(ctx.session_id(), Some("sess-1"));
        assert_eq!(ctx.origin(), Some("agent.example"));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_generic_values() {
        let mut ctx = InvocationContext::new();
        ctx.insert("attempt", serde_json::json!(1));

        assert!(ctx.contains_key("attempt"));
        assert_eq!(ctx.get("attempt"), Some(&serde_json::json!(1)));
        assert_eq!(ctx.session_id(), None);
    }
}
