// crates/toolgate-core/src/core/mod.rs
// ============================================================================
// Module: Toolgate Core Data Model
// Description: Canonical adapter records, identifiers, and status values.
// Purpose: Define the data shapes shared by registry, dispatch, and workflow.
// Dependencies: crate::core::{adapter, identifiers}
// ============================================================================

//! ## Overview
//! The core data model is serialization-stable: every type here crosses the
//! API boundary and must keep its serde form unchanged across releases.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod adapter;
pub mod identifiers;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapter::AdapterRecord;
pub use adapter::AdapterStatus;
pub use adapter::DEFAULT_ACTION;
pub use adapter::derive_actions;
pub use identifiers::ActionName;
pub use identifiers::AdapterId;
pub use identifiers::AdapterIdError;
pub use identifiers::RegistrationToken;
