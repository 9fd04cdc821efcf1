// crates/toolgate-core/tests/registry.rs
// ============================================================================
// Module: Registration Service Tests
// Description: Tests for gate-in, config update, and upsert semantics.
// Purpose: Validate record derivation and full-replace registration behavior.
// Dependencies: toolgate-core, serde_json
// ============================================================================

//! ## Overview
//! Ensures gate-in normalizes ids, derives actions from routes, falls back to
//! the implicit run action, and replaces rather than merges on
//! re-registration.

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
use toolgate_core::ActionName;
use toolgate_core::AdapterId;
use toolgate_core::AdapterStatus;
use toolgate_core::AdapterStore;
use toolgate_core::InMemoryAdapterStore;
use toolgate_core::RegistrationService;
use toolgate_core::RegistryError;
use toolgate_core::SharedAdapterStore;

fn service_with_store() -> (RegistrationService, SharedAdapterStore) {
    let store = SharedAdapterStore::from_store(InMemoryAdapterStore::new());
    (RegistrationService::new(store.clone()), store)
}

/// Verifies gate-in followed by get returns the normalized id.
#[test]
fn gate_in_normalizes_id_for_lookup() {
    let (service, store) = service_with_store();
    service.gate_in("  SLACK ", "Slack", json!({})).unwrap();

    let id = AdapterId::normalize("slack").unwrap();
    let record = store.get(&id).unwrap().unwrap();
    assert_eq!(record.id.as_str(), "slack");
    assert_eq!(record.status, AdapterStatus::Ready);
}

/// Verifies an empty name falls back to the title-cased id.
#[test]
fn gate_in_defaults_display_name_from_id() {
    let (service, _store) = service_with_store();
    let record = service.gate_in("docs-search", "", json!({})).unwrap();
    assert_eq!(record.display_name, "Docs-Search");
    assert_eq!(record.description, "Docs-Search adapter gated in");
    assert_eq!(record.launch_command, "launch:docs-search");
}

/// Verifies actions derive from route keys.
#[test]
fn gate_in_derives_actions_from_routes() {
    let (service, _store) = service_with_store();
    let config = json!({
        "base_url": "https://x.test",
        "routes": {"post_message": "/msg", "delete_message": "/del"},
    });
    let mut actions = service.gate_in("slack", "Slack", config).unwrap().actions;
    actions.sort();
    assert_eq!(actions, vec![ActionName::new("delete_message"), ActionName::new("post_message")]);
}

/// Verifies a config without routes yields the implicit run action.
#[test]
fn gate_in_defaults_to_run_action() {
    let (service, _store) = service_with_store();
    let record = service.gate_in("bare", "Bare", json!({})).unwrap();
    assert_eq!(record.actions, vec![ActionName::new("run")]);
}

/// Verifies an id that is empty after trimming fails validation.
#[test]
fn gate_in_rejects_empty_id() {
    let (service, _store) = service_with_store();
    let err = service.gate_in("   ", "Name", json!({})).unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
}

/// Verifies re-registration fully replaces config and recomputes actions.
#[test]
fn gate_in_replaces_previous_registration() {
    let (service, store) = service_with_store();
    let first_config = json!({
        "base_url": "https://old.test",
        "routes": {"ping": "/ping"},
        "extra": "kept only until re-registration",
    });
    let first = service.gate_in("slack", "Slack", first_config).unwrap();

    let second_config = json!({
        "base_url": "https://new.test",
        "routes": {"post_message": "/msg"},
    });
    let second = service.gate_in("slack", "Slack", second_config.clone()).unwrap();

    assert_eq!(second.config, second_config);
    assert_eq!(second.actions, vec![ActionName::new("post_message")]);
    assert_ne!(first.registered_at, second.registered_at);

    let id = AdapterId::normalize("slack").unwrap();
    let stored = store.get(&id).unwrap().unwrap();
    assert!(stored.config.get("extra").is_none());
    assert_eq!(store.list().unwrap().len(), 1);
}

/// Verifies config update replaces config only and re-derives actions.
#[test]
fn update_config_replaces_config_and_rederives_actions() {
    let (service, _store) = service_with_store();
    let original = service
        .gate_in("slack", "Slack", json!({"base_url": "https://x.test", "routes": {"a": "/a"}}))
        .unwrap();

    let updated = service
        .update_config("slack", json!({"base_url": "https://x.test", "routes": {"b": "/b"}}))
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.display_name, original.display_name);
    assert_eq!(updated.registered_at, original.registered_at);
    assert_eq!(updated.actions, vec![ActionName::new("b")]);
}

/// Verifies config update on an unregistered adapter reports not-found.
#[test]
fn update_config_fails_for_unknown_adapter() {
    let (service, _store) = service_with_store();
    let err = service.update_config("ghost", json!({})).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

/// Verifies list exposes registered adapters through the service.
#[test]
fn list_returns_registered_adapters() {
    let (service, _store) = service_with_store();
    service.gate_in("slack", "Slack", json!({})).unwrap();
    service.gate_in("docs", "Docs", json!({})).unwrap();
    assert_eq!(service.list().unwrap().len(), 2);
}
