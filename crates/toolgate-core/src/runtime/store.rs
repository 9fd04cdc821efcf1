// crates/toolgate-core/src/runtime/store.rs
// ============================================================================
// Module: Toolgate In-Memory Store
// Description: In-memory adapter store and shared store wrapper.
// Purpose: Provide the transient registry backing used in-process.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The in-memory store is the canonical backing for the adapter registry:
//! registry state is transient by contract and does not survive process
//! teardown. The map is guarded by a single mutex; cardinality is low and the
//! lock is held only for map access, never across remote I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::AdapterId;
use crate::core::AdapterRecord;
use crate::interfaces::AdapterStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory adapter store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAdapterStore {
    /// Adapter records keyed by normalized id, protected by a mutex.
    records: Arc<Mutex<BTreeMap<String, AdapterRecord>>>,
}

impl InMemoryAdapterStore {
    /// Creates a new empty in-memory adapter store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl AdapterStore for InMemoryAdapterStore {
    fn put(&self, record: AdapterRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Store("adapter store mutex poisoned".to_string()))?
            .insert(record.id.as_str().to_string(), record);
        Ok(())
    }

    fn get(&self, id: &AdapterId) -> Result<Option<AdapterRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("adapter store mutex poisoned".to_string()))?;
        Ok(guard.get(id.as_str()).cloned())
    }

    fn list(&self) -> Result<Vec<AdapterRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("adapter store mutex poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared adapter store backed by an `Arc` trait object.
///
/// Constructed once at startup and handed to the registration service and the
/// dispatcher, making store ownership explicit instead of ambient.
#[derive(Clone)]
pub struct SharedAdapterStore {
    /// Inner store implementation.
    inner: Arc<dyn AdapterStore + Send + Sync>,
}

impl SharedAdapterStore {
    /// Wraps an adapter store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl AdapterStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn AdapterStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl AdapterStore for SharedAdapterStore {
    fn put(&self, record: AdapterRecord) -> Result<(), StoreError> {
        self.inner.put(record)
    }

    fn get(&self, id: &AdapterId) -> Result<Option<AdapterRecord>, StoreError> {
        self.inner.get(id)
    }

    fn list(&self) -> Result<Vec<AdapterRecord>, StoreError> {
        self.inner.list()
    }
}
