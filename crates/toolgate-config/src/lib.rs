// crates/toolgate-config/src/lib.rs
// ============================================================================
// Module: Toolgate Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for toolgate.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `toolgate-config` defines the canonical configuration model for Toolgate.
//! Parsing is strict and fail-closed: unknown fields, oversized files, and
//! out-of-bounds limits are rejected rather than silently corrected.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
