//! Engine-seam traits.

use std::time::Duration;

use crate::config::defaults;
use crate::errors::RemoteError;
use crate::models::Finding;
use crate::phase::Phase;

/// Options forwarded with every phase backend call.
#[derive(Debug, Clone)]
pub struct PhaseOptions {
    /// Independent per-phase timeout.
    pub timeout: Duration,
    /// Ask the backend for strict-mode checks.
    pub strict: bool,
}

impl Default for PhaseOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(defaults::DEFAULT_PHASE_TIMEOUT_MS),
            strict: false,
        }
    }
}

/// Executes one remote validation phase.
///
/// Implementations must not mutate shared state; the network call is the
/// only side effect. Failures surface as `RemoteError` and are recovered
/// by the orchestrator into synthetic findings, so an implementation never
/// needs its own fallback behavior.
pub trait PhaseExecutor {
    async fn execute(
        &self,
        phase: Phase,
        content: &str,
        language: &str,
        options: &PhaseOptions,
    ) -> Result<Vec<Finding>, RemoteError>;
}
