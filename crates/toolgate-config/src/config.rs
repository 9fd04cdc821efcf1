// crates/toolgate-config/src/config.rs
// ============================================================================
// Module: Toolgate Configuration
// Description: Configuration loading and validation for Toolgate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, thiserror
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits and
//! `deny_unknown_fields` parsing. Missing or invalid configuration fails
//! closed rather than falling back to permissive behavior; only an absent
//! file yields defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "toolgate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "TOOLGATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 256 * 1024;
/// Default server bind address.
const DEFAULT_BIND: &str = "127.0.0.1:8600";
/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Maximum allowed request body size in bytes.
const MAX_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
/// Default remote call timeout in milliseconds.
const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 12_000;
/// Minimum allowed remote call timeout in milliseconds.
const MIN_REMOTE_TIMEOUT_MS: u64 = 1_000;
/// Maximum allowed remote call timeout in milliseconds.
const MAX_REMOTE_TIMEOUT_MS: u64 = 60_000;
/// Default maximum remote response size in bytes.
const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
/// Maximum allowed remote response size in bytes.
const MAX_MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;
/// Default user agent for outbound remote calls.
const DEFAULT_USER_AGENT: &str = "toolgate/0.1";
/// Default cap on workflow chain length.
const DEFAULT_MAX_WORKFLOW_STEPS: usize = 32;
/// Maximum allowed cap on workflow chain length.
const MAX_MAX_WORKFLOW_STEPS: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config file exceeded the size limit.
    #[error("config file exceeds size limit: {0} bytes")]
    TooLarge(u64),
    /// Config values failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Server section of the Toolgate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind: String,
    /// Maximum allowed request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Remote caller section of the Toolgate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RemoteConfig {
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Allow cleartext HTTP adapter endpoints.
    pub allow_http: bool,
    /// Maximum remote response size in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            allow_http: false,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Workflow section of the Toolgate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WorkflowConfig {
    /// Maximum number of steps accepted in one chain.
    pub max_steps: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_WORKFLOW_STEPS,
        }
    }
}

/// Root Toolgate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ToolgateConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote caller settings.
    pub remote: RemoteConfig,
    /// Workflow runner settings.
    pub workflow: WorkflowConfig,
}

impl ToolgateConfig {
    /// Loads configuration from an explicit path, the `TOOLGATE_CONFIG`
    /// environment variable, or `toolgate.toml` in the working directory.
    ///
    /// An absent file yields defaults; an unreadable or invalid file fails.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on read, size, parse, or validation failures.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_config_path(path);
        if !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let config = Self::load_file(&resolved)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and parses a specific configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on read, size, or parse failures.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE as u64 {
            return Err(ConfigError::TooLarge(metadata.len()));
        }
        let raw = fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        toml::from_str(&raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Validates configuration values against hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any value is out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind address: {}", self.server.bind)))?;
        if self.server.max_body_bytes == 0 || self.server.max_body_bytes > MAX_MAX_BODY_BYTES {
            return Err(ConfigError::Invalid(format!(
                "server.max_body_bytes must be in 1..={MAX_MAX_BODY_BYTES}"
            )));
        }
        if self.remote.timeout_ms < MIN_REMOTE_TIMEOUT_MS
            || self.remote.timeout_ms > MAX_REMOTE_TIMEOUT_MS
        {
            return Err(ConfigError::Invalid(format!(
                "remote.timeout_ms must be in {MIN_REMOTE_TIMEOUT_MS}..={MAX_REMOTE_TIMEOUT_MS}"
            )));
        }
        if self.remote.max_response_bytes == 0
            || self.remote.max_response_bytes > MAX_MAX_RESPONSE_BYTES
        {
            return Err(ConfigError::Invalid(format!(
                "remote.max_response_bytes must be in 1..={MAX_MAX_RESPONSE_BYTES}"
            )));
        }
        if self.remote.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("remote.user_agent must not be empty".to_string()));
        }
        if self.workflow.max_steps == 0 || self.workflow.max_steps > MAX_MAX_WORKFLOW_STEPS {
            return Err(ConfigError::Invalid(format!(
                "workflow.max_steps must be in 1..={MAX_MAX_WORKFLOW_STEPS}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves the effective config path from argument, env var, or default.
fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    if let Some(explicit) = path {
        return explicit.to_path_buf();
    }
    if let Ok(from_env) = env::var(CONFIG_ENV_VAR) {
        if !from_env.trim().is_empty() {
            return PathBuf::from(from_env);
        }
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}
