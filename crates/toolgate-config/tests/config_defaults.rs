// crates/toolgate-config/tests/config_defaults.rs
// ============================================================================
// Module: Config Defaults Tests
// Description: Tests for default configuration and example parity.
// Purpose: Validate that defaults are valid and the example matches them.
// Dependencies: toolgate-config
// ============================================================================

//! ## Overview
//! Defaults must pass validation, and the generated example must parse into
//! exactly the default configuration so docs never drift from code.

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

use toolgate_config::ToolgateConfig;
use toolgate_config::config_toml_example;

/// Verifies the default configuration passes validation.
#[test]
fn defaults_are_valid() {
    let config = ToolgateConfig::default();
    config.validate().unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:8600");
    assert_eq!(config.remote.timeout_ms, 12_000);
    assert!(!config.remote.allow_http);
    assert_eq!(config.workflow.max_steps, 32);
}

/// Verifies the generated example parses into the default configuration.
#[test]
fn example_matches_defaults() {
    let parsed: ToolgateConfig = toml::from_str(&config_toml_example()).unwrap();
    parsed.validate().unwrap();
    assert_eq!(parsed, ToolgateConfig::default());
}

/// Verifies an empty document yields full defaults.
#[test]
fn empty_document_yields_defaults() {
    let parsed: ToolgateConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, ToolgateConfig::default());
}
