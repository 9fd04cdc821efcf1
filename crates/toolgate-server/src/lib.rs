// crates/toolgate-server/src/lib.rs
// ============================================================================
// Module: Toolgate Server Library
// Description: HTTP API surface for the Toolgate orchestration core.
// Purpose: Expose registry, dispatch, and workflow operations over axum.
// Dependencies: toolgate-core, toolgate-config, toolgate-remote, axum, tokio
// ============================================================================

//! ## Overview
//! `toolgate-server` wires the core runtime services behind a small REST
//! surface. All transports call into the same runtime services; the server
//! adds only request parsing, error-to-status mapping, body-size caps, and
//! audit events.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::ApiAuditEvent;
pub use audit::ApiOperation;
pub use audit::ApiOutcome;
pub use audit::AuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use server::ServerError;
pub use server::ToolgateServer;
