// crates/toolgate-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Tests
// Description: Unit tests for CLI argument parsing.
// Purpose: Ensure the command tree parses and rejects as intended.
// Dependencies: toolgate-cli main types, clap
// ============================================================================

//! ## Overview
//! Validates the clap command tree: subcommand recognition, option parsing,
//! and rejection of unknown commands and flags.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use clap::Parser;

use super::Cli;
use super::Commands;
use super::ConfigCommand;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn parses_serve_with_config_path() {
    let cli = Cli::try_parse_from(["toolgate", "serve", "--config", "custom.toml"])
        .expect("serve should parse");
    match cli.command {
        Some(Commands::Serve(command)) => {
            assert_eq!(command.config, Some(PathBuf::from("custom.toml")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_serve_without_config_path() {
    let cli = Cli::try_parse_from(["toolgate", "serve"]).expect("serve should parse");
    match cli.command {
        Some(Commands::Serve(command)) => assert!(command.config.is_none()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_config_example() {
    let cli = Cli::try_parse_from(["toolgate", "config", "example"])
        .expect("config example should parse");
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommand::Example,
        })
    ));
}

#[test]
fn parses_config_validate_with_path() {
    let cli = Cli::try_parse_from(["toolgate", "config", "validate", "--config", "toolgate.toml"])
        .expect("config validate should parse");
    match cli.command {
        Some(Commands::Config {
            command: ConfigCommand::Validate(command),
        }) => {
            assert_eq!(command.config, Some(PathBuf::from("toolgate.toml")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_version_flag_without_subcommand() {
    let cli = Cli::try_parse_from(["toolgate", "--version"]).expect("version flag should parse");
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

#[test]
fn rejects_unknown_subcommand() {
    let result = Cli::try_parse_from(["toolgate", "launch"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_flag_on_serve() {
    let result = Cli::try_parse_from(["toolgate", "serve", "--port", "9000"]);
    assert!(result.is_err());
}
