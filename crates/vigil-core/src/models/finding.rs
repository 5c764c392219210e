use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Whether this severity short-circuits a run under `stop_on_failure`.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

/// Outcome of the check that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Passed,
    Failed,
    Error,
}

/// What kind of check a finding came from.
///
/// Mirrors the phases, plus `System` for synthetic findings the
/// orchestrator fabricates from remote failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Syntax,
    Semantic,
    Performance,
    Compliance,
    Security,
    System,
}

impl From<Phase> for FindingCategory {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Syntax => FindingCategory::Syntax,
            Phase::Semantic => FindingCategory::Semantic,
            Phase::Performance => FindingCategory::Performance,
            Phase::Compliance => FindingCategory::Compliance,
            Phase::Security => FindingCategory::Security,
        }
    }
}

/// Position of a finding within the rule content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: Option<u32>,
}

/// One reported issue or confirmation produced by a phase.
///
/// Immutable once produced; a finding belongs to exactly one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub source_phase: Phase,
    pub category: FindingCategory,
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
    pub status: FindingStatus,
    pub suggested_fix: Option<String>,
    pub execution_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl Finding {
    /// Synthetic finding for a failed phase call.
    ///
    /// Carries the error message so the caller sees an explicit record for
    /// the phase instead of silence.
    pub fn system_error(phase: Phase, message: String, execution_time_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_phase: phase,
            category: FindingCategory::System,
            severity: Severity::Critical,
            message,
            location: None,
            status: FindingStatus::Error,
            suggested_fix: None,
            execution_time_ms,
            timestamp: Utc::now(),
        }
    }
}
