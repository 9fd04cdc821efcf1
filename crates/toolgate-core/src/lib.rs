// crates/toolgate-core/src/lib.rs
// ============================================================================
// Module: Toolgate Core Library
// Description: Public API surface for the Toolgate core.
// Purpose: Expose adapter model, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Toolgate core provides the adapter registry, action dispatch, and workflow
//! chain execution that make up the orchestration layer. It is
//! transport-agnostic and integrates through explicit interfaces rather than
//! embedding into a particular HTTP framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::ActionName;
pub use self::core::AdapterId;
pub use self::core::AdapterIdError;
pub use self::core::AdapterRecord;
pub use self::core::AdapterStatus;
pub use self::core::DEFAULT_ACTION;
pub use self::core::RegistrationToken;
pub use self::core::derive_actions;
pub use interfaces::AdapterStore;
pub use interfaces::RemoteCallError;
pub use interfaces::RemoteCaller;
pub use interfaces::StoreError;
pub use runtime::ActionDispatcher;
pub use runtime::AdapterStatusReport;
pub use runtime::DispatchError;
pub use runtime::DispatchResult;
pub use runtime::InMemoryAdapterStore;
pub use runtime::RegistrationService;
pub use runtime::RegistryError;
pub use runtime::SharedAdapterStore;
pub use runtime::StepOutcome;
pub use runtime::WorkflowError;
pub use runtime::WorkflowLog;
pub use runtime::WorkflowLogEntry;
pub use runtime::WorkflowRunner;
pub use runtime::WorkflowRunnerConfig;
pub use runtime::WorkflowStep;
pub use runtime::join_endpoint;
