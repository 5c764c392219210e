use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::finding::Finding;
use super::summary::RunSummary;
use crate::phase::Phase;

/// Lifecycle state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Completed,
    Error,
}

/// One end-to-end execution of the configured phases for a given content.
///
/// Owned by the orchestrator call that created it. Runs are discriminated
/// by `seq`: a consumer holding results from an older run discards them
/// when a run with a higher `seq` exists (supersede, not cancel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationRun {
    pub id: String,
    /// Monotonically increasing per orchestrator instance.
    pub seq: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub phase_order: Vec<Phase>,
    pub findings: Vec<Finding>,
    pub current_phase: Option<Phase>,
    pub progress_percent: f64,
    pub status: RunStatus,
    pub summary: RunSummary,
}
