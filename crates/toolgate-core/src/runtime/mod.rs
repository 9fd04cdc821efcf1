// crates/toolgate-core/src/runtime/mod.rs
// ============================================================================
// Module: Toolgate Runtime
// Description: Registry, dispatcher, workflow runner, and in-memory store.
// Purpose: Execute adapter registration, dispatch, and workflow chains.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the operations the API surface exposes. All
//! transports must call into the same runtime services so registry and
//! dispatch semantics stay identical regardless of entry point.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod dispatch;
pub mod registry;
pub mod store;
pub mod workflow;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dispatch::ActionDispatcher;
pub use dispatch::AdapterStatusReport;
pub use dispatch::DispatchError;
pub use dispatch::DispatchResult;
pub use dispatch::join_endpoint;
pub use registry::RegistrationService;
pub use registry::RegistryError;
pub use store::InMemoryAdapterStore;
pub use store::SharedAdapterStore;
pub use workflow::DEFAULT_MAX_STEPS;
pub use workflow::StepOutcome;
pub use workflow::WorkflowError;
pub use workflow::WorkflowLog;
pub use workflow::WorkflowLogEntry;
pub use workflow::WorkflowRunner;
pub use workflow::WorkflowRunnerConfig;
pub use workflow::WorkflowStep;
