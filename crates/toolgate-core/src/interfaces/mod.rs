// crates/toolgate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Toolgate Interfaces
// Description: Backend-agnostic interfaces for adapter storage and remote calls.
// Purpose: Define the contract surfaces used by the Toolgate runtime.
// Dependencies: crate::core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Toolgate integrates with storage backends and remote
//! adapters without embedding backend-specific details. Implementations must
//! fail closed: a store that cannot answer reports an error rather than an
//! empty result, and a remote caller that cannot complete within its bound
//! reports a classified failure rather than hanging.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::AdapterId;
use crate::core::AdapterRecord;

// ============================================================================
// SECTION: Adapter Store
// ============================================================================

/// Adapter store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store backend failed.
    #[error("adapter store error: {0}")]
    Store(String),
}

/// Backend-agnostic adapter store.
///
/// The store owns the mapping from normalized adapter id to record. `put` is
/// an unconditional overwrite; last write wins with no merging. Writes must be
/// atomic: a concurrent `get` observes either the previous record or the new
/// one, never a partially-constructed record.
pub trait AdapterStore {
    /// Stores a record under its normalized id, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot complete the write.
    fn put(&self, record: AdapterRecord) -> Result<(), StoreError>;

    /// Loads the record stored under the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot complete the read.
    fn get(&self, id: &AdapterId) -> Result<Option<AdapterRecord>, StoreError>;

    /// Lists all currently-registered adapters.
    ///
    /// Ordering is unspecified; callers must not rely on registration order
    /// surviving overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot complete the read.
    fn list(&self) -> Result<Vec<AdapterRecord>, StoreError>;
}

// ============================================================================
// SECTION: Remote Caller
// ============================================================================

/// Remote call errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteCallError {
    /// Endpoint address was rejected before any request was made.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Transport failed, timed out, or the response could not be read.
    #[error("remote call failed: {0}")]
    Transport(String),
    /// Remote endpoint answered with a non-success status.
    #[error("remote endpoint returned status {status}")]
    Status {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },
}

/// Backend-agnostic remote invocation capability.
///
/// The single collaborator contract shared by adapter dispatch and, outside
/// the core, by upstream proxies: POST a JSON body to an endpoint under a
/// bounded timeout and get JSON back or a classified error.
pub trait RemoteCaller {
    /// Posts `body` to `endpoint` and returns the JSON response payload.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] on invalid endpoints, transport failures,
    /// timeouts, or non-success statuses.
    fn call(&self, endpoint: &str, body: &Value) -> Result<Value, RemoteCallError>;
}
