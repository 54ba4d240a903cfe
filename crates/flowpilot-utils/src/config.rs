//! Service configuration
//!
//! Everything is read from environment variables:
//!
//! | variable                               | meaning                                  |
//! |----------------------------------------|------------------------------------------|
//! | `DAIN_API_KEY`                         | service credential (required)            |
//! | `FLOWPILOT_PORT`                       | port for the transport layer (`2022`)    |
//! | `FLOWPILOT_REQUEST_TIMEOUT_SECS`       | outbound request timeout (optional)      |
//! | `FLOWPILOT_ENDPOINT_<TOOL_ID>`         | per-tool endpoint URL override           |
//!
//! `<TOOL_ID>` is the tool identifier upper-cased with `-` replaced by `_`, e.g.
//! `FLOWPILOT_ENDPOINT_ADD_TO_NOTION`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const API_KEY_VAR: &str = "DAIN_API_KEY";
pub const PORT_VAR: &str = "FLOWPILOT_PORT";
pub const REQUEST_TIMEOUT_VAR: &str = "FLOWPILOT_REQUEST_TIMEOUT_SECS";
pub const ENDPOINT_PREFIX: &str = "FLOWPILOT_ENDPOINT_";
pub const DEFAULT_PORT: u16 = 2022;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),

    /// A variable is set to an unusable value
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Process configuration for the flow-pilot service
#[derive(Clone, PartialEq)]
pub struct ServiceConfig {
    api_key: String,
    port: u16,
    request_timeout: Option<Duration>,
    endpoint_overrides: BTreeMap<String, String>,
}

impl ServiceConfig {
    /// Create a configuration with defaults for everything but the credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            port: DEFAULT_PORT,
            request_timeout: None,
            endpoint_overrides: BTreeMap::new(),
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the outbound request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Override the endpoint of a tool
    pub fn with_endpoint(mut self, tool_id: impl Into<String>, url: impl Into<String>) -> Self {
        self.endpoint_overrides.insert(tool_id.into(), url.into());
        self
    }

    /// Load from the process environment
    ///
    /// Variables that do not belong to flow-pilot are skipped without being decoded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_os_vars(std::env::vars_os())
    }

    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Result<Self, ConfigError> {
        let mut known = Vec::new();
        for (key, value) in vars {
            let Some(key) = key.to_str().filter(|k| is_config_var(k)) else {
                continue;
            };
            let value = value.into_string().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                reason: "value is not valid UTF-8".to_string(),
            })?;
            known.push((key.to_string(), value));
        }
        Self::from_vars(known)
    }

    /// Load from an explicit set of variables
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut api_key = None;
        let mut port = None;
        let mut timeout = None;
        let mut endpoint_overrides = BTreeMap::new();

        for (key, value) in vars {
            let key = key.as_ref();
            let value: String = value.into();
            match key {
                API_KEY_VAR => api_key = Some(value),
                PORT_VAR => port = Some(value),
                REQUEST_TIMEOUT_VAR => timeout = Some(value),
                _ => {
                    if let Some(tool) = key.strip_prefix(ENDPOINT_PREFIX) {
                        endpoint_overrides.insert(tool_id_from_var(tool), value);
                    }
                }
            }
        }

        let mut config = Self::new(api_key.ok_or(ConfigError::Missing(API_KEY_VAR))?);
        config.endpoint_overrides = endpoint_overrides;

        if let Some(port) = port {
            config.port = port.trim().parse().map_err(|e| ConfigError::Invalid {
                key: PORT_VAR.to_string(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(timeout) = timeout {
            let secs: u64 = timeout.trim().parse().map_err(|e| ConfigError::Invalid {
                key: REQUEST_TIMEOUT_VAR.to_string(),
                reason: format!("{e}"),
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Missing(API_KEY_VAR));
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid {
                key: PORT_VAR.to_string(),
                reason: "port must be greater than 0".to_string(),
            });
        }

        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::Invalid {
                key: REQUEST_TIMEOUT_VAR.to_string(),
                reason: "timeout must be greater than 0".to_string(),
            });
        }

        for (tool, endpoint) in &self.endpoint_overrides {
            let key = format!("{ENDPOINT_PREFIX}{}", var_from_tool_id(tool));
            let parsed = Url::parse(endpoint).map_err(|e| ConfigError::Invalid {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }

        Ok(())
    }

    /// Service credential for the identity layer
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Port for the transport layer
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Outbound request timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Endpoint override for a tool
    pub fn endpoint_override(&self, tool_id: &str) -> Option<&str> {
        self.endpoint_overrides.get(tool_id).map(String::as_str)
    }

    /// All endpoint overrides keyed by tool id
    pub fn endpoint_overrides(&self) -> &BTreeMap<String, String> {
        &self.endpoint_overrides
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("endpoint_overrides", &self.endpoint_overrides)
            .finish()
    }
}

fn is_config_var(key: &str) -> bool {
    matches!(key, API_KEY_VAR | PORT_VAR | REQUEST_TIMEOUT_VAR) || key.starts_with(ENDPOINT_PREFIX)
}

fn tool_id_from_var(suffix: &str) -> String {
    suffix.to_ascii_lowercase().replace('_', "-")
}

fn var_from_tool_id(tool_id: &str) -> String {
    tool_id.to_ascii_uppercase().replace('-', "_")
}
