// crates/toolgate-core/src/core/adapter.rs
// ============================================================================
// Module: Toolgate Adapter Records
// Description: Adapter record shape, status lifecycle, and action derivation.
// Purpose: Define the registry's stored record and its derivation rules.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! An adapter record captures one registered external tool: a normalized id,
//! display metadata, an opaque configuration value, and the derived action
//! set. Configuration is semi-structured by design; only `base_url` and
//! `routes` have meaning to the dispatcher, and both are validated lazily at
//! dispatch time rather than at registration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::ActionName;
use crate::core::identifiers::AdapterId;
use crate::core::identifiers::RegistrationToken;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Implicit action assumed when a configuration declares no routes.
pub const DEFAULT_ACTION: &str = "run";

/// Configuration key holding the remote base address.
pub(crate) const CONFIG_BASE_URL_KEY: &str = "base_url";

/// Configuration key holding the action-to-route table.
pub(crate) const CONFIG_ROUTES_KEY: &str = "routes";

// ============================================================================
// SECTION: Adapter Status
// ============================================================================

/// Adapter lifecycle status.
///
/// # Invariants
/// - Variants are stable for serialization and status probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterStatus {
    /// Adapter is gated in and invocable.
    Ready,
    /// Adapter is not registered. Reported by status probes, never stored.
    NotGated,
    /// Adapter state could not be determined.
    Unknown,
}

impl AdapterStatus {
    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NotGated => "not_gated",
            Self::Unknown => "unknown",
        }
    }
}

// ============================================================================
// SECTION: Adapter Record
// ============================================================================

/// One registered external tool.
///
/// # Invariants
/// - `actions` is always derivable from `config.routes` via
///   [`derive_actions`]; the registry recomputes it on every config change.
/// - A record missing `base_url` or a route is dispatch-ineligible but still
///   exists, which is distinct from "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// Normalized adapter identifier.
    pub id: AdapterId,
    /// Human-readable adapter name.
    pub display_name: String,
    /// Derived informational description.
    pub description: String,
    /// Derived launch token for client-side bootstrap.
    pub launch_command: String,
    /// Action names currently invocable.
    pub actions: Vec<ActionName>,
    /// Adapter lifecycle status.
    pub status: AdapterStatus,
    /// Opaque caller-supplied configuration.
    pub config: Value,
    /// Token distinguishing this registration from earlier ones.
    pub registered_at: RegistrationToken,
}

impl AdapterRecord {
    /// Returns the configured base URL, when present and a string.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.config.get(CONFIG_BASE_URL_KEY).and_then(Value::as_str)
    }

    /// Returns the route fragment configured for the given action.
    #[must_use]
    pub fn route_for(&self, action: &ActionName) -> Option<&str> {
        self.config
            .get(CONFIG_ROUTES_KEY)
            .and_then(Value::as_object)
            .and_then(|routes| routes.get(action.as_str()))
            .and_then(Value::as_str)
    }
}

// ============================================================================
// SECTION: Action Derivation
// ============================================================================

/// Derives the invocable action set from a configuration value.
///
/// Actions are the keys of `config.routes`. A configuration without routes
/// (missing, empty, or not an object) yields the implicit [`DEFAULT_ACTION`].
#[must_use]
pub fn derive_actions(config: &Value) -> Vec<ActionName> {
    let routes = config.get(CONFIG_ROUTES_KEY).and_then(Value::as_object);
    match routes {
        Some(map) if !map.is_empty() => map.keys().map(ActionName::new).collect(),
        _ => vec![ActionName::new(DEFAULT_ACTION)],
    }
}
