//! Recording stand-in for the external call adapter

use async_trait::async_trait;
use flowpilot_core::ExternalCallError;
use flowpilot_tools::{ExternalCall, ExternalResponse};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub(crate) struct StubCall {
    reply: Result<Value, ExternalCallError>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl StubCall {
    pub(crate) fn replying(body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(err: ExternalCallError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Every (url, body) pair posted so far
    pub(crate) fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExternalCall for StubCall {
    async fn post(&self, url: &str, body: &Value) -> Result<ExternalResponse, ExternalCallError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.reply.clone().map(ExternalResponse::new)
    }
}
