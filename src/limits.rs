/*!
 * Guard Limits and Constants
 *
 * Centralized location for thresholds used by the guard module.
 */

// =============================================================================
// ERROR CLASSIFICATION
// =============================================================================

/// Maximum number of `source()` links followed when classifying an error (64)
/// Bounds the walk so a cyclic cause chain cannot loop forever
pub const MAX_ERROR_CHAIN_DEPTH: usize = 64;

/// Shallow walk depth (8)
/// Enough for a handful of context layers added by callers
pub const SHALLOW_ERROR_CHAIN_DEPTH: usize = 8;

/// Deep walk depth (1024)
/// For heavily layered error stacks
pub const DEEP_ERROR_CHAIN_DEPTH: usize = 1024;

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Default guard label used in structured log fields
pub const DEFAULT_GUARD_LABEL: &str = "callback";

/// Environment variable that switches tracing output to JSON
pub const TRACE_JSON_ENV: &str = "GUARD_TRACE_JSON";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_TRACE_FILTER: &str = "info";
