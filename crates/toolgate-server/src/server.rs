// crates/toolgate-server/src/server.rs
// ============================================================================
// Module: Toolgate HTTP Server
// Description: axum routes for gate-in, dispatch, and workflow operations.
// Purpose: Map core operations onto REST endpoints with a stable error shape.
// Dependencies: toolgate-core, toolgate-config, toolgate-remote, axum, tokio
// ============================================================================

//! ## Overview
//! The server exposes the orchestration core over HTTP. Handlers parse the
//! request, run the core operation on the blocking pool (the core and its
//! remote caller are synchronous), and translate the error taxonomy onto
//! status codes: validation and configuration gaps are 400, unknown adapters
//! are 404, remote failures are 502, and a failed workflow is 500 with the
//! partial log in the body. Status probes never fail; absence is a value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use toolgate_config::ToolgateConfig;
use toolgate_core::ActionDispatcher;
use toolgate_core::ActionName;
use toolgate_core::DispatchError;
use toolgate_core::InMemoryAdapterStore;
use toolgate_core::RegistrationService;
use toolgate_core::RegistryError;
use toolgate_core::RemoteCaller;
use toolgate_core::SharedAdapterStore;
use toolgate_core::WorkflowError;
use toolgate_core::WorkflowLog;
use toolgate_core::WorkflowRunner;
use toolgate_core::WorkflowRunnerConfig;
use toolgate_core::WorkflowStep;
use toolgate_remote::HttpCallerConfig;
use toolgate_remote::HttpRemoteCaller;

use crate::audit::ApiAuditEvent;
use crate::audit::ApiOperation;
use crate::audit::ApiOutcome;
use crate::audit::AuditSink;
use crate::audit::StderrAuditSink;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Server lifecycle errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration was invalid.
    #[error("config error: {0}")]
    Config(String),
    /// Server components could not be initialized.
    #[error("init error: {0}")]
    Init(String),
    /// Transport failed to bind or serve.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Error response carried back to the client.
struct ApiError {
    /// HTTP status to answer with.
    status: StatusCode,
    /// Stable error kind label.
    kind: &'static str,
    /// Human-readable detail.
    detail: String,
    /// Partial workflow log, present only for workflow failures.
    log: Option<WorkflowLog>,
}

impl ApiError {
    /// Builds an error without an attached log.
    fn new(status: StatusCode, kind: &'static str, detail: String) -> Self {
        Self {
            status,
            kind,
            detail,
            log: None,
        }
    }

    /// Builds the internal-fault error shape.
    fn internal(detail: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", detail)
    }

    /// Serializes the error into the response body shape.
    fn body(&self) -> Value {
        let mut error = json!({
            "kind": self.kind,
            "detail": self.detail,
        });
        if let Some(log) = &self.log {
            if let (Some(map), Ok(entries)) = (error.as_object_mut(), serde_json::to_value(log)) {
                map.insert("log".to_string(), entries);
            }
        }
        json!({ "error": error })
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match &err {
            RegistryError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "validation", err.to_string())
            }
            RegistryError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            RegistryError::Store(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let status = match &err {
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
            DispatchError::Configuration {
                ..
            } => StatusCode::BAD_REQUEST,
            DispatchError::Remote(_) => StatusCode::BAD_GATEWAY,
            DispatchError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.kind(), err.to_string())
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::MalformedStep(detail) => {
                Self::new(StatusCode::BAD_REQUEST, "malformed_step", detail)
            }
            WorkflowError::Failed {
                step_index,
                detail,
                log,
            } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "workflow_failed",
                detail: format!("workflow failed at step {step_index}: {detail}"),
                log: Some(log),
            },
        }
    }
}

// ============================================================================
// SECTION: Server State
// ============================================================================

/// Shared state behind every handler.
struct AppState {
    /// Registration service writing the adapter store.
    registry: RegistrationService,
    /// Dispatcher resolving and invoking adapter actions.
    dispatcher: ActionDispatcher,
    /// Workflow chain runner.
    runner: WorkflowRunner,
    /// Audit sink receiving one event per handled request.
    audit: Arc<dyn AuditSink>,
    /// Maximum accepted request body size in bytes.
    max_body_bytes: usize,
}

/// Builds shared server state from configuration and injected collaborators.
fn build_state(
    config: &ToolgateConfig,
    caller: Arc<dyn RemoteCaller + Send + Sync>,
    audit: Arc<dyn AuditSink>,
) -> Arc<AppState> {
    let store = SharedAdapterStore::from_store(InMemoryAdapterStore::new());
    let registry = RegistrationService::new(store.clone());
    let dispatcher = ActionDispatcher::new(store, caller);
    let runner = WorkflowRunner::new(dispatcher.clone(), WorkflowRunnerConfig {
        max_steps: config.workflow.max_steps,
    });
    Arc::new(AppState {
        registry,
        dispatcher,
        runner,
        audit,
        max_body_bytes: config.server.max_body_bytes,
    })
}

// ============================================================================
// SECTION: Toolgate Server
// ============================================================================

/// HTTP server instance.
pub struct ToolgateServer {
    /// Server configuration.
    config: ToolgateConfig,
    /// Shared handler state.
    state: Arc<AppState>,
}

impl ToolgateServer {
    /// Builds a server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid or the
    /// remote caller cannot be initialized.
    pub fn from_config(config: ToolgateConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let caller = HttpRemoteCaller::new(HttpCallerConfig {
            allow_http: config.remote.allow_http,
            timeout_ms: config.remote.timeout_ms,
            max_response_bytes: config.remote.max_response_bytes,
            user_agent: config.remote.user_agent.clone(),
        })
        .map_err(|err| ServerError::Init(err.to_string()))?;
        let state = build_state(&config, Arc::new(caller), Arc::new(StderrAuditSink));
        Ok(Self {
            config,
            state,
        })
    }

    /// Returns the axum router for this server.
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Binds the configured address and serves requests until shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr: SocketAddr = self
            .config
            .server
            .bind
            .parse()
            .map_err(|_| ServerError::Config("invalid bind address".to_string()))?;
        let app = build_router(self.state);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the route table over shared state.
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/gate", post(handle_gate))
        .route("/api/adapters", get(handle_list))
        .route("/api/adapters/{adapter_id}/status", get(handle_status))
        .route("/api/adapters/{adapter_id}/config", post(handle_update_config))
        .route("/api/execute", post(handle_execute))
        .route("/api/workflow/chain", post(handle_workflow))
        .with_state(state)
}

// ============================================================================
// SECTION: Request Payloads
// ============================================================================

/// Returns the default empty-object payload.
fn empty_object() -> Value {
    json!({})
}

/// Gate-in request body.
#[derive(Debug, Deserialize)]
struct GateRequest {
    /// Raw adapter identifier.
    adapter_id: String,
    /// Optional display name; empty falls back to the title-cased id.
    #[serde(default)]
    name: String,
    /// Opaque adapter configuration.
    #[serde(default = "empty_object")]
    config: Value,
}

/// Single action execution request body.
#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    /// Raw adapter identifier.
    adapter_id: String,
    /// Action to execute.
    action: String,
    /// Parameters forwarded as the remote request body.
    #[serde(default = "empty_object")]
    params: Value,
}

/// Configuration update request body.
#[derive(Debug, Deserialize)]
struct UpdateConfigRequest {
    /// Replacement configuration value.
    config: Value,
}

/// Workflow chain request body.
#[derive(Debug, Deserialize)]
struct WorkflowRequest {
    /// Ordered steps to execute.
    steps: Vec<WorkflowStep>,
}

// ============================================================================
// SECTION: Handler Plumbing
// ============================================================================

/// Parses a request body, enforcing the configured size cap.
fn parse_body<T: DeserializeOwned>(
    state: &AppState,
    bytes: &Bytes,
    parse_error_kind: &'static str,
) -> Result<T, ApiError> {
    if bytes.len() > state.max_body_bytes {
        return Err(ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "validation",
            format!("request body exceeds {} bytes", state.max_body_bytes),
        ));
    }
    serde_json::from_slice(bytes).map_err(|err| {
        ApiError::new(StatusCode::BAD_REQUEST, parse_error_kind, format!("invalid request: {err}"))
    })
}

/// Runs a core operation on the blocking pool.
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|_| ApiError::internal("blocking task failed".to_string()))?
}

/// Finalizes a handler outcome: records the audit event and builds the reply.
fn respond(
    state: &AppState,
    operation: ApiOperation,
    adapter_id: Option<String>,
    started: Instant,
    outcome: Result<Value, ApiError>,
) -> (StatusCode, Json<Value>) {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let (status, body, label) = match outcome {
        Ok(body) => (StatusCode::OK, body, ApiOutcome::Ok),
        Err(err) => (err.status, err.body(), ApiOutcome::Error),
    };
    state.audit.record(&ApiAuditEvent::new(operation, adapter_id, label, duration_ms));
    (status, Json(body))
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles adapter gate-in.
async fn handle_gate(
    State(state): State<Arc<AppState>>,
    bytes: Bytes,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let parsed: Result<GateRequest, ApiError> = parse_body(&state, &bytes, "validation");
    let (adapter_id, outcome) = match parsed {
        Ok(request) => {
            let adapter_id = request.adapter_id.clone();
            let registry = state.registry.clone();
            let result = run_blocking(move || {
                let record = registry.gate_in(&request.adapter_id, &request.name, request.config)?;
                serde_json::to_value(record)
                    .map_err(|err| ApiError::internal(err.to_string()))
            })
            .await;
            (Some(adapter_id), result)
        }
        Err(err) => (None, Err(err)),
    };
    respond(&state, ApiOperation::Gate, adapter_id, started, outcome)
}

/// Handles adapter listing.
async fn handle_list(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let registry = state.registry.clone();
    let outcome = run_blocking(move || {
        let adapters = registry.list()?;
        serde_json::to_value(adapters)
            .map(|entries| json!({ "adapters": entries }))
            .map_err(|err| ApiError::internal(err.to_string()))
    })
    .await;
    respond(&state, ApiOperation::List, None, started, outcome)
}

/// Handles adapter status probes. Absence is a value, not an error.
async fn handle_status(
    State(state): State<Arc<AppState>>,
    Path(adapter_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let dispatcher = state.dispatcher.clone();
    let probe_id = adapter_id.clone();
    let outcome = run_blocking(move || {
        let report = dispatcher
            .status(&probe_id)
            .map_err(|err| ApiError::internal(err.to_string()))?;
        serde_json::to_value(report).map_err(|err| ApiError::internal(err.to_string()))
    })
    .await;
    respond(&state, ApiOperation::Status, Some(adapter_id), started, outcome)
}

/// Handles adapter configuration updates.
async fn handle_update_config(
    State(state): State<Arc<AppState>>,
    Path(adapter_id): Path<String>,
    bytes: Bytes,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let parsed: Result<UpdateConfigRequest, ApiError> = parse_body(&state, &bytes, "validation");
    let outcome = match parsed {
        Ok(request) => {
            let registry = state.registry.clone();
            let target = adapter_id.clone();
            run_blocking(move || {
                let record = registry.update_config(&target, request.config)?;
                serde_json::to_value(record)
                    .map_err(|err| ApiError::internal(err.to_string()))
            })
            .await
        }
        Err(err) => Err(err),
    };
    respond(&state, ApiOperation::UpdateConfig, Some(adapter_id), started, outcome)
}

/// Handles single action execution.
async fn handle_execute(
    State(state): State<Arc<AppState>>,
    bytes: Bytes,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let parsed: Result<ExecuteRequest, ApiError> = parse_body(&state, &bytes, "validation");
    let (adapter_id, outcome) = match parsed {
        Ok(request) => {
            let adapter_id = request.adapter_id.clone();
            let dispatcher = state.dispatcher.clone();
            let result = run_blocking(move || {
                let action = ActionName::new(request.action);
                let result = dispatcher.execute(&request.adapter_id, &action, &request.params)?;
                serde_json::to_value(result)
                    .map_err(|err| ApiError::internal(err.to_string()))
            })
            .await;
            (Some(adapter_id), result)
        }
        Err(err) => (None, Err(err)),
    };
    respond(&state, ApiOperation::Execute, adapter_id, started, outcome)
}

/// Handles workflow chain execution.
async fn handle_workflow(
    State(state): State<Arc<AppState>>,
    bytes: Bytes,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let parsed: Result<WorkflowRequest, ApiError> = parse_body(&state, &bytes, "malformed_step");
    let outcome = match parsed {
        Ok(request) => {
            let runner = state.runner.clone();
            run_blocking(move || {
                let log = runner.run(&request.steps)?;
                serde_json::to_value(log)
                    .map(|entries| json!({ "workflow": "complete", "log": entries }))
                    .map_err(|err| ApiError::internal(err.to_string()))
            })
            .await
        }
        Err(err) => Err(err),
    };
    respond(&state, ApiOperation::Workflow, None, started, outcome)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
