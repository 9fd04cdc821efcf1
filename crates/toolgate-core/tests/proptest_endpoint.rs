// crates/toolgate-core/tests/proptest_endpoint.rs
// ============================================================================
// Module: Endpoint Join Property Tests
// Description: Property tests for base URL and route joining.
// Purpose: Validate single-slash normalization across slash variants.
// Dependencies: toolgate-core, proptest
// ============================================================================

//! ## Overview
//! The endpoint join must produce the same address regardless of trailing
//! slashes on the base or leading slashes on the route, and the seam between
//! the two parts is always exactly one slash.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use proptest::prelude::*;
use toolgate_core::join_endpoint;

proptest! {
    /// Joining is invariant under added trailing/leading slashes.
    #[test]
    fn join_is_slash_invariant(
        host in "[a-z]{1,12}",
        path in "[a-z0-9/_-]{0,24}",
        base_slashes in 0usize..3,
        route_slashes in 0usize..3,
    ) {
        let base = format!("https://{host}.test{}", "/".repeat(base_slashes));
        let route = format!("{}{path}", "/".repeat(route_slashes));
        let canonical = join_endpoint(&format!("https://{host}.test"), &path);
        prop_assert_eq!(join_endpoint(&base, &route), canonical);
    }

    /// The joined endpoint starts with the trimmed base plus one slash.
    #[test]
    fn join_has_single_separator(host in "[a-z]{1,12}", path in "[a-z0-9_-]{1,24}") {
        let base = format!("https://{host}.test");
        let joined = join_endpoint(&base, &path);
        prop_assert_eq!(joined, format!("{base}/{path}"));
    }
}
