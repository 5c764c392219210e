use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Abort remaining phases once a critical or high finding appears.
    pub stop_on_failure: bool,
    /// Per-phase timeout (milliseconds). Exceeding it fails that phase
    /// only, never the whole run.
    pub phase_timeout_ms: u64,
    /// Whether completed runs populate the result cache.
    pub cache_results: bool,
    /// Lifetime of cached results (milliseconds).
    pub cache_ttl_ms: u64,
    /// Forwarded to the backend as a strict-mode hint.
    pub strict: bool,
}

impl OrchestratorConfig {
    pub fn phase_timeout(&self) -> Duration {
        Duration::from_millis(self.phase_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            stop_on_failure: false,
            phase_timeout_ms: defaults::DEFAULT_PHASE_TIMEOUT_MS,
            cache_results: true,
            cache_ttl_ms: defaults::DEFAULT_CACHE_TTL_MS,
            strict: false,
        }
    }
}
