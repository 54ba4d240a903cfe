//! Identity of the agent invoking a tool

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The invoking agent: an opaque id plus optional profile fields
///
/// Handlers receive it by shared reference and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    profile: BTreeMap<String, serde_json::Value>,
}

impl CallerIdentity {
    /// Create an identity with no profile fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: BTreeMap::new(),
        }
    }

    /// Attach a profile field
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.profile.insert(key.into(), value);
        self
    }

    /// Opaque caller id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a profile field
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.profile.get(key)
    }

    /// All profile fields
    pub fn profile(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_fields() {
        let caller = CallerIdentity::new("agent-42").with_field("name", json!("Scheduler"));

        assert_eq!(caller.id(), "agent-42");
        assert_eq!(caller.field("name"), Some(&json!("Scheduler")));
        assert!(caller.field("email").is_none());
    }

    #[test]
    fn test_deserialize_without_profile() {
        let caller: CallerIdentity = serde_json::from_value(json!({"id": "agent-1"})).unwrap();

        assert_eq!(caller, CallerIdentity::new("agent-1"));
        assert!(caller.profile().is_empty());
        assert_eq!(serde_json::to_value(&caller).unwrap(), json!({"id": "agent-1"}));
    }
}
