// crates/toolgate-server/src/audit.rs
// ============================================================================
// Module: Toolgate API Audit
// Description: Observability hooks for API request handling.
// Purpose: Provide audit events and latency buckets without hard deps.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module exposes a thin audit interface for API request events. It is
//! intentionally dependency-light so deployments can plug in their own
//! collector without redesign; the default sink writes one JSON line per
//! event to stderr. Events must never carry request payloads: adapter ids and
//! outcome labels only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Latency buckets in milliseconds for API request events.
pub const API_LATENCY_BUCKETS_MS: &[u64] = &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000, 2_500,
    5_000, 10_000, 30_000];

// ============================================================================
// SECTION: Event Labels
// ============================================================================

/// API operation classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiOperation {
    /// Adapter gate-in.
    Gate,
    /// Adapter listing.
    List,
    /// Adapter status probe.
    Status,
    /// Adapter configuration update.
    UpdateConfig,
    /// Single action dispatch.
    Execute,
    /// Workflow chain run.
    Workflow,
}

impl ApiOperation {
    /// Returns a stable label for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gate => "gate",
            Self::List => "list",
            Self::Status => "status",
            Self::UpdateConfig => "update_config",
            Self::Execute => "execute",
            Self::Workflow => "workflow",
        }
    }
}

/// API request outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiOutcome {
    /// Request completed successfully.
    Ok,
    /// Request failed.
    Error,
}

impl ApiOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// One audit event describing a handled API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiAuditEvent {
    /// Operation label.
    pub operation: &'static str,
    /// Adapter id involved, when the operation targets one.
    pub adapter_id: Option<String>,
    /// Outcome label.
    pub outcome: &'static str,
    /// Request duration in milliseconds.
    pub duration_ms: u64,
    /// Latency bucket ceiling containing the duration.
    pub latency_bucket_ms: u64,
}

impl ApiAuditEvent {
    /// Builds an event for the given operation and outcome.
    #[must_use]
    pub fn new(
        operation: ApiOperation,
        adapter_id: Option<String>,
        outcome: ApiOutcome,
        duration_ms: u64,
    ) -> Self {
        Self {
            operation: operation.as_str(),
            adapter_id,
            outcome: outcome.as_str(),
            duration_ms,
            latency_bucket_ms: latency_bucket(duration_ms),
        }
    }
}

/// Returns the smallest bucket ceiling at or above the duration.
#[must_use]
pub fn latency_bucket(duration_ms: u64) -> u64 {
    API_LATENCY_BUCKETS_MS
        .iter()
        .copied()
        .find(|bucket| duration_ms <= *bucket)
        .unwrap_or(u64::MAX)
}

// ============================================================================
// SECTION: Audit Sinks
// ============================================================================

/// Sink receiving API audit events.
pub trait AuditSink: Send + Sync {
    /// Records one audit event.
    fn record(&self, event: &ApiAuditEvent);
}

/// Audit sink writing one JSON line per event to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            let _ = writeln!(handle, "{payload}");
        }
    }
}

/// No-op audit sink for tests.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &ApiAuditEvent) {}
}
