// crates/toolgate-remote/src/lib.rs
// ============================================================================
// Module: Toolgate Remote Caller
// Description: Blocking HTTP implementation of the remote caller interface.
// Purpose: POST JSON to adapter endpoints under strict timeout and size limits.
// Dependencies: toolgate-core, reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! The HTTP remote caller is the single outbound-call capability shared by
//! adapter dispatch and upstream proxies: one bounded POST with a JSON body,
//! returning JSON or a classified error. It enforces a per-call timeout,
//! disables redirects, restricts cleartext HTTP unless configured, and caps
//! response sizes to preserve fail-closed behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use serde_json::Value;
use toolgate_core::RemoteCallError;
use toolgate_core::RemoteCaller;
use url::Url;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default per-call timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;

/// Default maximum response size in bytes.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Configuration for the HTTP remote caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCallerConfig {
    /// Allow cleartext HTTP endpoints (disabled by default).
    pub allow_http: bool,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpCallerConfig {
    fn default() -> Self {
        Self {
            allow_http: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            user_agent: "toolgate/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Caller Implementation
// ============================================================================

/// HTTP remote caller for adapter invocations.
pub struct HttpRemoteCaller {
    /// Caller configuration, including limits and policy.
    config: HttpCallerConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpRemoteCaller {
    /// Creates a new HTTP remote caller with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] when the HTTP client cannot be created.
    pub fn new(config: HttpCallerConfig) -> Result<Self, RemoteCallError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|_| RemoteCallError::Transport("http client build failed".to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }
}

impl RemoteCaller for HttpRemoteCaller {
    fn call(&self, endpoint: &str, body: &Value) -> Result<Value, RemoteCallError> {
        let url = parse_endpoint(endpoint, &self.config)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|err| classify_send_error(&err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteCallError::Status {
                status: status.as_u16(),
            });
        }
        let bytes = read_response_limited(response, self.config.max_response_bytes)?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|_| RemoteCallError::Transport("remote response was not json".to_string()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses and validates the endpoint address against caller policy.
fn parse_endpoint(endpoint: &str, config: &HttpCallerConfig) -> Result<Url, RemoteCallError> {
    let url = Url::parse(endpoint)
        .map_err(|_| RemoteCallError::InvalidEndpoint(endpoint.to_string()))?;
    match url.scheme() {
        "https" => {}
        "http" if config.allow_http => {}
        other => {
            return Err(RemoteCallError::InvalidEndpoint(format!(
                "unsupported url scheme: {other}"
            )));
        }
    }
    Ok(url)
}

/// Classifies a reqwest send error into the caller taxonomy.
fn classify_send_error(err: &reqwest::Error) -> RemoteCallError {
    if err.is_timeout() {
        return RemoteCallError::Transport("remote call timed out".to_string());
    }
    RemoteCallError::Transport("remote call failed".to_string())
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: reqwest::blocking::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, RemoteCallError> {
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| RemoteCallError::Transport("response size limit exceeds u64".to_string()))?;
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| RemoteCallError::Transport("failed to read response".to_string()))?;
    if buf.len() > max_bytes {
        return Err(RemoteCallError::Transport("response exceeds size limit".to_string()));
    }
    Ok(buf)
}
