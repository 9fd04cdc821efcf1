// crates/toolgate-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Helpers
// Description: Shared fixtures for registry, dispatch, and workflow tests.
// Purpose: Provide a scripted remote caller and canned adapter configs.
// Dependencies: toolgate-core, serde_json
// ============================================================================

//! ## Overview
//! Test helpers shared across the core integration tests: a scripted remote
//! caller that records endpoints and fails on demand, plus canned adapter
//! configurations.

use std::sync::Arc;
use std::sync::Mutex;

use serde_json::Value;
use serde_json::json;
use toolgate_core::RemoteCallError;
use toolgate_core::RemoteCaller;

/// Remote caller returning a canned response and recording every endpoint.
pub struct ScriptedCaller {
    /// Endpoints observed, in call order.
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Canned success payload.
    pub response: Value,
    /// Substring that makes a call fail when present in the endpoint.
    pub fail_marker: Option<String>,
}

impl ScriptedCaller {
    /// Creates a caller that always succeeds with the given payload.
    pub fn succeeding(response: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response,
            fail_marker: None,
        }
    }

    /// Creates a caller that fails whenever the endpoint contains `marker`.
    pub fn failing_on(marker: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: json!({"ok": true}),
            fail_marker: Some(marker.to_string()),
        }
    }

    /// Returns the endpoints observed so far.
    pub fn observed(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RemoteCaller for ScriptedCaller {
    fn call(&self, endpoint: &str, _body: &Value) -> Result<Value, RemoteCallError> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        if let Some(marker) = &self.fail_marker {
            if endpoint.contains(marker.as_str()) {
                return Err(RemoteCallError::Transport("connection refused".to_string()));
            }
        }
        Ok(self.response.clone())
    }
}

/// Returns a config with a base URL and a single named route.
pub fn routed_config(base_url: &str, action: &str, route: &str) -> Value {
    json!({
        "base_url": base_url,
        "routes": { action: route },
    })
}
