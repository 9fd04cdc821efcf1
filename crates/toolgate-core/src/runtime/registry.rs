// crates/toolgate-core/src/runtime/registry.rs
// ============================================================================
// Module: Toolgate Registration Service
// Description: Adapter gate-in and configuration update operations.
// Purpose: Validate, normalize, and build adapter records into the store.
// Dependencies: crate::{core, interfaces}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The registration service is the only writer of the adapter store. Gating
//! in is an upsert: re-registering an id fully replaces the previous record,
//! config included, with no merging. Configuration updates replace only the
//! config value on an existing record and re-derive the action set so the
//! record never contradicts its own routes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::AdapterId;
use crate::core::AdapterRecord;
use crate::core::AdapterStatus;
use crate::core::RegistrationToken;
use crate::core::derive_actions;
use crate::interfaces::AdapterStore;
use crate::interfaces::StoreError;
use crate::runtime::store::SharedAdapterStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registration service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller input failed validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Adapter is not registered.
    #[error("adapter not found: {0}")]
    NotFound(String),
    /// Store backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Registration Service
// ============================================================================

/// Service building adapter records and writing them into the store.
#[derive(Clone)]
pub struct RegistrationService {
    /// Shared adapter store written by this service.
    store: SharedAdapterStore,
}

impl RegistrationService {
    /// Creates a registration service over the given store.
    #[must_use]
    pub const fn new(store: SharedAdapterStore) -> Self {
        Self {
            store,
        }
    }

    /// Gates in an adapter, replacing any existing registration for the id.
    ///
    /// An empty `name` falls back to the title-cased id. The configuration is
    /// stored opaquely; `base_url` and `routes` are validated at dispatch
    /// time, not here.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] when the id is empty after
    /// normalization, or [`RegistryError::Store`] when the write fails.
    pub fn gate_in(
        &self,
        adapter_id: &str,
        name: &str,
        config: Value,
    ) -> Result<AdapterRecord, RegistryError> {
        let id = AdapterId::normalize(adapter_id)
            .map_err(|err| RegistryError::Validation(err.to_string()))?;
        let display_name = if name.trim().is_empty() {
            id.title_case()
        } else {
            name.trim().to_string()
        };
        let record = AdapterRecord {
            description: format!("{display_name} adapter gated in"),
            launch_command: format!("launch:{id}"),
            actions: derive_actions(&config),
            status: AdapterStatus::Ready,
            registered_at: RegistrationToken::next(),
            id,
            display_name,
            config,
        };
        self.store.put(record.clone())?;
        Ok(record)
    }

    /// Replaces the configuration of an existing adapter.
    ///
    /// The action set is re-derived from the new routes; id, display name, and
    /// registration token are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] on an invalid id,
    /// [`RegistryError::NotFound`] when the adapter is unregistered, or
    /// [`RegistryError::Store`] when the write fails.
    pub fn update_config(
        &self,
        adapter_id: &str,
        new_config: Value,
    ) -> Result<AdapterRecord, RegistryError> {
        let id = AdapterId::normalize(adapter_id)
            .map_err(|err| RegistryError::Validation(err.to_string()))?;
        let Some(mut record) = self.store.get(&id)? else {
            return Err(RegistryError::NotFound(id.to_string()));
        };
        record.actions = derive_actions(&new_config);
        record.config = new_config;
        self.store.put(record.clone())?;
        Ok(record)
    }

    /// Lists all currently-registered adapters.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Store`] when the read fails.
    pub fn list(&self) -> Result<Vec<AdapterRecord>, RegistryError> {
        Ok(self.store.list()?)
    }
}
