//! Shared test helpers for the Vigil workspace.
//!
//! `MockPhaseExecutor` replaces the HTTP executor in tests: each phase
//! gets a scripted outcome, and a call counter supports assertions that
//! no phase executed at all (pre-flight and cache-hit paths).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use vigil_core::errors::RemoteError;
use vigil_core::models::{Finding, FindingStatus, Severity};
use vigil_core::phase::Phase;
use vigil_core::traits::{PhaseExecutor, PhaseOptions};

/// Scripted outcome for one phase.
#[derive(Debug, Clone)]
pub enum PhaseScript {
    /// Return these findings.
    Findings(Vec<Finding>),
    /// Fail with a backend 500 carrying this message.
    Fail(String),
    /// Fail with a timeout after the given elapsed milliseconds.
    Timeout(u64),
}

/// Mock executor with per-phase scripted outcomes.
///
/// Unscripted phases return one passed finding. Scripts are fixed at
/// construction; the executor itself never mutates them.
#[derive(Debug, Default)]
pub struct MockPhaseExecutor {
    scripts: HashMap<Phase, PhaseScript>,
    calls: AtomicUsize,
    invoked: Mutex<Vec<Phase>>,
}

impl MockPhaseExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for one phase (builder style).
    pub fn script(mut self, phase: Phase, script: PhaseScript) -> Self {
        self.scripts.insert(phase, script);
        self
    }

    /// Total number of execute calls across all phases.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Phases that were executed, in order.
    pub fn invoked_phases(&self) -> Vec<Phase> {
        self.invoked.lock().expect("invoked lock").clone()
    }
}

impl PhaseExecutor for MockPhaseExecutor {
    async fn execute(
        &self,
        phase: Phase,
        _content: &str,
        _language: &str,
        _options: &PhaseOptions,
    ) -> Result<Vec<Finding>, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invoked.lock().expect("invoked lock").push(phase);

        match self.scripts.get(&phase).cloned() {
            Some(PhaseScript::Findings(findings)) => Ok(findings),
            Some(PhaseScript::Fail(message)) => Err(RemoteError::Backend {
                phase,
                status: 500,
                message,
            }),
            Some(PhaseScript::Timeout(elapsed_ms)) => Err(RemoteError::Timeout {
                phase,
                elapsed_ms,
            }),
            None => Ok(vec![finding(phase, Severity::Low, FindingStatus::Passed, "check passed")]),
        }
    }
}

/// Build one finding with sensible defaults.
pub fn finding(phase: Phase, severity: Severity, status: FindingStatus, message: &str) -> Finding {
    Finding {
        id: uuid::Uuid::new_v4().to_string(),
        source_phase: phase,
        category: phase.into(),
        severity,
        message: message.to_string(),
        location: None,
        status,
        suggested_fix: None,
        execution_time_ms: 10,
        timestamp: Utc::now(),
    }
}

/// A finding for a check that passed.
pub fn passed_finding(phase: Phase) -> Finding {
    finding(phase, Severity::Low, FindingStatus::Passed, "check passed")
}

/// A finding for a check that failed at the given severity.
pub fn failed_finding(phase: Phase, severity: Severity) -> Finding {
    finding(phase, severity, FindingStatus::Failed, "check failed")
}
