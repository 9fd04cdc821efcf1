// crates/toolgate-core/src/runtime/dispatch.rs
// ============================================================================
// Module: Toolgate Action Dispatcher
// Description: Resolve (adapter, action) to a remote endpoint and invoke it.
// Purpose: Classify dispatch outcomes into a stable error taxonomy.
// Dependencies: crate::{core, interfaces}, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The dispatcher resolves an adapter record, looks up the route for the
//! requested action, joins it onto the configured base address, and delegates
//! the remote call to an injected [`RemoteCaller`]. Missing configuration is a
//! caller-correctable error and is kept distinct from remote failures so
//! workflow logs stay attributable. The record is cloned out of the store
//! before the call; no lock is held across remote I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::ActionName;
use crate::core::AdapterId;
use crate::core::AdapterStatus;
use crate::interfaces::AdapterStore;
use crate::interfaces::RemoteCaller;
use crate::interfaces::StoreError;
use crate::runtime::store::SharedAdapterStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Action dispatch errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Adapter is not registered.
    #[error("adapter not found: {0}")]
    NotFound(String),
    /// Adapter exists but lacks the configuration needed for this action.
    #[error("adapter missing base_url or route for action '{action}'")]
    Configuration {
        /// Action the caller requested.
        action: String,
    },
    /// Remote adapter call failed: transport error, timeout, or bad status.
    #[error("remote execution failed: {0}")]
    Remote(String),
    /// Store backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DispatchError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Configuration {
                ..
            } => "configuration",
            Self::Remote(_) => "remote_execution",
            Self::Store(_) => "store",
        }
    }
}

// ============================================================================
// SECTION: Dispatch Results
// ============================================================================

/// Successful dispatch outcome carrying the remote payload verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    /// Always true; present so logs read unambiguously alongside failures.
    pub ok: bool,
    /// Remote response payload, unmodified.
    pub payload: Value,
}

/// Status probe response for one adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterStatusReport {
    /// Adapter identifier as supplied by the caller.
    pub adapter_id: String,
    /// Stored status, or `not_gated` when the adapter is unknown.
    pub status: AdapterStatus,
}

// ============================================================================
// SECTION: Action Dispatcher
// ============================================================================

/// Dispatcher resolving and invoking single adapter actions.
#[derive(Clone)]
pub struct ActionDispatcher {
    /// Shared adapter store read by this dispatcher.
    store: SharedAdapterStore,
    /// Remote caller used for adapter invocations.
    caller: Arc<dyn RemoteCaller + Send + Sync>,
}

impl ActionDispatcher {
    /// Creates a dispatcher over the given store and remote caller.
    #[must_use]
    pub fn new(store: SharedAdapterStore, caller: Arc<dyn RemoteCaller + Send + Sync>) -> Self {
        Self {
            store,
            caller,
        }
    }

    /// Probes the status of an adapter.
    ///
    /// Absence is a value, not an error: probing an unknown adapter reports
    /// `not_gated`. Only a store fault produces an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store read fails.
    pub fn status(&self, adapter_id: &str) -> Result<AdapterStatusReport, StoreError> {
        let status = match AdapterId::normalize(adapter_id) {
            Ok(id) => self
                .store
                .get(&id)?
                .map_or(AdapterStatus::NotGated, |record| record.status),
            Err(_) => AdapterStatus::NotGated,
        };
        Ok(AdapterStatusReport {
            adapter_id: adapter_id.to_string(),
            status,
        })
    }

    /// Executes a single adapter action.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotFound`] for unregistered adapters,
    /// [`DispatchError::Configuration`] when `base_url` or the action route is
    /// missing, and [`DispatchError::Remote`] when the remote call fails.
    pub fn execute(
        &self,
        adapter_id: &str,
        action: &ActionName,
        params: &Value,
    ) -> Result<DispatchResult, DispatchError> {
        let id = AdapterId::normalize(adapter_id)
            .map_err(|_| DispatchError::NotFound(adapter_id.trim().to_string()))?;
        let Some(record) = self.store.get(&id)? else {
            return Err(DispatchError::NotFound(id.to_string()));
        };
        let (Some(base_url), Some(route)) = (record.base_url(), record.route_for(action)) else {
            return Err(DispatchError::Configuration {
                action: action.to_string(),
            });
        };
        let endpoint = join_endpoint(base_url, route);
        let payload = self
            .caller
            .call(&endpoint, params)
            .map_err(|err| DispatchError::Remote(err.to_string()))?;
        Ok(DispatchResult {
            ok: true,
            payload,
        })
    }
}

// ============================================================================
// SECTION: Endpoint Join
// ============================================================================

/// Joins a base address and a route fragment with exactly one slash.
///
/// Trailing slashes on the base and leading slashes on the route are both
/// tolerated; the result always carries a single separator.
#[must_use]
pub fn join_endpoint(base_url: &str, route: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = route.trim_start_matches('/');
    format!("{base}/{path}")
}
