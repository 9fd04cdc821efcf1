// crates/toolgate-config/src/examples.rs
// ============================================================================
// Module: Toolgate Config Examples
// Description: Deterministic example generation for toolgate.toml.
// Purpose: Provide a documented, valid starting configuration.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! The example generator emits a commented `toolgate.toml` matching the
//! defaults. The output must always parse and validate; a test enforces this.

// ============================================================================
// SECTION: Example Generation
// ============================================================================

/// Returns a documented example `toolgate.toml`.
#[must_use]
pub fn config_toml_example() -> String {
    "\
# Toolgate configuration.
# All sections and keys are optional; the values below are the defaults.

[server]
# Socket address the HTTP API binds to.
bind = \"127.0.0.1:8600\"
# Maximum accepted request body size in bytes.
max_body_bytes = 1048576

[remote]
# Per-call timeout for adapter invocations, in milliseconds.
timeout_ms = 12000
# Allow cleartext http adapter endpoints. Keep disabled outside local setups.
allow_http = false
# Maximum accepted adapter response size in bytes.
max_response_bytes = 1048576
# User agent sent on outbound adapter calls.
user_agent = \"toolgate/0.1\"

[workflow]
# Maximum number of steps accepted in one workflow chain.
max_steps = 32
"
    .to_string()
}
