//! Outbound calls to external collaborators
//!
//! Handlers reach the outside world only through an [`ExternalCall`]: a single JSON
//! POST, a single attempt, and a parsed JSON response. Transport and decode failures
//! are reported as distinct [`ExternalCallError`] variants.

use async_trait::async_trait;
use flowpilot_core::ExternalCallError;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Adapter that POSTs a JSON body and returns the parsed JSON response
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalCall: Send + Sync {
    /// Send `body` to `url` and decode the response body as JSON
    async fn post(&self, url: &str, body: &Value) -> Result<ExternalResponse, ExternalCallError>;
}

/// Parsed, untyped response of an external call
///
/// Handlers pull the fields they expect out of it. Missing fields degrade to an
/// empty string instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExternalResponse(Value);

impl ExternalResponse {
    /// Wrap a parsed JSON body
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Raw field lookup (only meaningful when the body is an object)
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Read a field as text
    ///
    /// Strings are returned verbatim, numbers and booleans in their JSON text form.
    /// Missing fields, `null`, arrays and objects yield an empty string.
    pub fn text_field(&self, field: &str) -> String {
        match self.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        }
    }

    /// The underlying JSON value
    pub fn body(&self) -> &Value {
        &self.0
    }

    /// Consume the response and return the JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for ExternalResponse {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

/// [`ExternalCall`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpExternalCall {
    http_client: reqwest::Client,
}

impl Default for HttpExternalCall {
    fn default() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

impl HttpExternalCall {
    /// Create an adapter that relies on the transport's default timeouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter whose requests time out after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, ExternalCallError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExternalCallError::transport("<client>", e))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl ExternalCall for HttpExternalCall {
    async fn post(&self, url: &str, body: &Value) -> Result<ExternalResponse, ExternalCallError> {
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ExternalCallError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("External endpoint {} answered HTTP {}", url, status);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExternalCallError::transport(url, e))?;

        let parsed: Value =
            serde_json::from_slice(&bytes).map_err(|e| ExternalCallError::decode(url, e))?;

        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(ExternalResponse::new(parsed))
    }
}
