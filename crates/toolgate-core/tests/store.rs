// crates/toolgate-core/tests/store.rs
// ============================================================================
// Module: Adapter Store Tests
// Description: Tests for the in-memory adapter store implementation.
// Purpose: Validate overwrite, lookup, and listing behavior.
// Dependencies: toolgate-core, serde_json
// ============================================================================

//! ## Overview
//! Ensures the in-memory store honors last-write-wins replacement and treats
//! absence as a value rather than an error.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use serde_json::json;
use toolgate_core::AdapterId;
use toolgate_core::AdapterRecord;
use toolgate_core::AdapterStatus;
use toolgate_core::AdapterStore;
use toolgate_core::InMemoryAdapterStore;
use toolgate_core::RegistrationToken;
use toolgate_core::derive_actions;

fn sample_record(id: &str, base_url: &str) -> AdapterRecord {
    let config = json!({"base_url": base_url, "routes": {"ping": "/ping"}});
    AdapterRecord {
        id: AdapterId::normalize(id).unwrap(),
        display_name: id.to_string(),
        description: format!("{id} adapter gated in"),
        launch_command: format!("launch:{id}"),
        actions: derive_actions(&config),
        status: AdapterStatus::Ready,
        config,
        registered_at: RegistrationToken::next(),
    }
}

/// Verifies storing then loading a record succeeds.
#[test]
fn store_put_and_get_roundtrip() {
    let store = InMemoryAdapterStore::new();
    let record = sample_record("slack", "https://x.test");
    store.put(record.clone()).unwrap();

    let loaded = store.get(&record.id).unwrap();
    assert_eq!(loaded, Some(record));
}

/// Verifies an unknown id loads as absent, not as an error.
#[test]
fn store_get_missing_returns_none() {
    let store = InMemoryAdapterStore::new();
    let id = AdapterId::normalize("ghost").unwrap();
    assert_eq!(store.get(&id).unwrap(), None);
}

/// Verifies a second put under the same id fully replaces the first record.
#[test]
fn store_put_overwrites_existing_record() {
    let store = InMemoryAdapterStore::new();
    store.put(sample_record("slack", "https://old.test")).unwrap();
    let replacement = sample_record("slack", "https://new.test");
    store.put(replacement.clone()).unwrap();

    let loaded = store.get(&replacement.id).unwrap().unwrap();
    assert_eq!(loaded.base_url(), Some("https://new.test"));
    assert_eq!(store.list().unwrap().len(), 1);
}

/// Verifies listing returns every registered adapter exactly once.
#[test]
fn store_list_returns_all_records() {
    let store = InMemoryAdapterStore::new();
    store.put(sample_record("slack", "https://a.test")).unwrap();
    store.put(sample_record("docs", "https://b.test")).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    let mut ids: Vec<&str> = listed.iter().map(|record| record.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["docs", "slack"]);
}
