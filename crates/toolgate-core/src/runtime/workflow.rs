// crates/toolgate-core/src/runtime/workflow.rs
// ============================================================================
// Module: Toolgate Workflow Chain Executor
// Description: Sequential execution of ordered adapter action chains.
// Purpose: Accumulate a step-indexed log and stop at the first failure.
// Dependencies: crate::runtime::dispatch, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The workflow runner is a pure control-flow harness over the action
//! dispatcher. Steps are validated for shape before anything executes, then
//! dispatched strictly in order; step i+1 never starts before step i has
//! returned, because later steps may depend on side effects of earlier ones
//! (a chain may gate in a tool and then call it). The first dispatch failure
//! stops the chain and the error carries the partial log, failing entry
//! included, so callers can see exactly how far execution progressed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::ActionName;
use crate::runtime::dispatch::ActionDispatcher;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default cap on the number of steps in one workflow chain.
pub const DEFAULT_MAX_STEPS: usize = 32;

// ============================================================================
// SECTION: Workflow Data Model
// ============================================================================

/// One step of a workflow chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Adapter to invoke.
    pub adapter_id: String,
    /// Action to execute on the adapter.
    pub action: ActionName,
    /// Parameters forwarded as the remote request body.
    pub params: Value,
}

/// Outcome of one executed workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum StepOutcome {
    /// Step dispatched successfully.
    Ok {
        /// Remote response payload, unmodified.
        payload: Value,
    },
    /// Step dispatch failed; the chain stopped here.
    Failed {
        /// Stable error kind label from the dispatch taxonomy.
        error_kind: String,
        /// Human-readable failure detail.
        error_detail: String,
    },
}

/// One entry of a workflow log, pairing a step with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowLogEntry {
    /// The step as submitted.
    pub step: WorkflowStep,
    /// Outcome of dispatching the step.
    pub result: StepOutcome,
}

/// Ordered execution log, one entry per executed step.
pub type WorkflowLog = Vec<WorkflowLogEntry>;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Workflow execution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Input failed shape validation; nothing was executed.
    #[error("malformed workflow step: {0}")]
    MalformedStep(String),
    /// A step failed; execution stopped with a partial log.
    #[error("workflow failed at step {step_index}: {detail}")]
    Failed {
        /// Zero-based index of the failing step.
        step_index: usize,
        /// Failure detail from the dispatch error.
        detail: String,
        /// Partial log up to and including the failing step.
        log: WorkflowLog,
    },
}

// ============================================================================
// SECTION: Workflow Runner
// ============================================================================

/// Configuration for the workflow runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowRunnerConfig {
    /// Maximum number of steps accepted in one chain.
    pub max_steps: usize,
}

impl Default for WorkflowRunnerConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Sequential workflow chain runner.
#[derive(Clone)]
pub struct WorkflowRunner {
    /// Dispatcher used for each step.
    dispatcher: ActionDispatcher,
    /// Runner configuration.
    config: WorkflowRunnerConfig,
}

impl WorkflowRunner {
    /// Creates a runner over the given dispatcher.
    #[must_use]
    pub const fn new(dispatcher: ActionDispatcher, config: WorkflowRunnerConfig) -> Self {
        Self {
            dispatcher,
            config,
        }
    }

    /// Runs a workflow chain to completion or first failure.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::MalformedStep`] when the step list fails
    /// fail-fast validation, or [`WorkflowError::Failed`] with the partial log
    /// when a step's dispatch fails.
    pub fn run(&self, steps: &[WorkflowStep]) -> Result<WorkflowLog, WorkflowError> {
        validate_steps(steps, self.config.max_steps)?;

        let mut log: WorkflowLog = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            match self.dispatcher.execute(&step.adapter_id, &step.action, &step.params) {
                Ok(result) => {
                    log.push(WorkflowLogEntry {
                        step: step.clone(),
                        result: StepOutcome::Ok {
                            payload: result.payload,
                        },
                    });
                }
                Err(err) => {
                    let detail = err.to_string();
                    log.push(WorkflowLogEntry {
                        step: step.clone(),
                        result: StepOutcome::Failed {
                            error_kind: err.kind().to_string(),
                            error_detail: detail.clone(),
                        },
                    });
                    return Err(WorkflowError::Failed {
                        step_index: index,
                        detail,
                        log,
                    });
                }
            }
        }
        Ok(log)
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates workflow input shape before any step executes.
fn validate_steps(steps: &[WorkflowStep], max_steps: usize) -> Result<(), WorkflowError> {
    if steps.is_empty() {
        return Err(WorkflowError::MalformedStep(
            "a non-empty list of steps is required".to_string(),
        ));
    }
    if steps.len() > max_steps {
        return Err(WorkflowError::MalformedStep(format!(
            "workflow exceeds step limit: {} steps (max {max_steps})",
            steps.len()
        )));
    }
    for (index, step) in steps.iter().enumerate() {
        if step.adapter_id.trim().is_empty() {
            return Err(WorkflowError::MalformedStep(format!(
                "step {index} is missing an adapter_id"
            )));
        }
        if step.action.is_empty() {
            return Err(WorkflowError::MalformedStep(format!(
                "step {index} is missing an action"
            )));
        }
    }
    Ok(())
}
