//! Default values for all configuration structs.

/// Per-phase timeout for remote validation calls (milliseconds).
pub const DEFAULT_PHASE_TIMEOUT_MS: u64 = 10_000;

/// Quiet period before a debounced trigger fires (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 750;

/// Lifetime of a cached result set (milliseconds).
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

/// Maximum number of cached result sets.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_024;
