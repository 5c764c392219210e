use serde::{Deserialize, Serialize};

use super::finding::{Finding, FindingStatus, Severity};

/// Finding counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate statistics over a run's findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub by_severity: SeverityCounts,
    /// Percentage of findings with status `passed`. 0.0 when there are no
    /// findings at all.
    pub success_rate: f64,
    pub average_execution_time_ms: f64,
}

impl RunSummary {
    /// Aggregate a finding list. The single place summary stats come from.
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = RunSummary {
            total: findings.len(),
            ..Default::default()
        };

        let mut total_time_ms: u64 = 0;
        for finding in findings {
            match finding.status {
                FindingStatus::Passed => summary.passed += 1,
                FindingStatus::Failed => summary.failed += 1,
                FindingStatus::Error => summary.errored += 1,
            }
            match finding.severity {
                Severity::Critical => summary.by_severity.critical += 1,
                Severity::High => summary.by_severity.high += 1,
                Severity::Medium => summary.by_severity.medium += 1,
                Severity::Low => summary.by_severity.low += 1,
            }
            total_time_ms += finding.execution_time_ms;
        }

        if summary.total > 0 {
            summary.success_rate = summary.passed as f64 / summary.total as f64 * 100.0;
            summary.average_execution_time_ms = total_time_ms as f64 / summary.total as f64;
        }

        summary
    }
}
