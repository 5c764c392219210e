//! Orchestrator: sequential phase execution with error isolation.
//!
//! Phases run one at a time, in canonical order. A failed phase call is
//! recorded as a single synthetic critical finding and execution moves on
//! to the next phase, unless `stop_on_failure` is set and a blocking
//! finding appeared. The only error `run` ever returns is pre-flight
//! input validation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use vigil_core::config::OrchestratorConfig;
use vigil_core::errors::{ConfigurationError, VigilResult};
use vigil_core::models::{Finding, OrchestrationRun, ProgressUpdate, RunStatus, RunSummary};
use vigil_core::phase::Phase;
use vigil_core::traits::{PhaseExecutor, PhaseOptions};

use crate::cache::ResultCache;

/// One orchestration request.
pub struct RunRequest<'a> {
    pub content: &'a str,
    pub language: &'a str,
    /// Phases to run. A subset of the canonical order; never reordered.
    pub phases: &'a [Phase],
    /// Receives one update per phase, before the phase executes.
    pub observer: Option<&'a (dyn Fn(ProgressUpdate) + Send + Sync)>,
}

impl<'a> RunRequest<'a> {
    pub fn new(content: &'a str, language: &'a str, phases: &'a [Phase]) -> Self {
        Self {
            content,
            language,
            phases,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'a (dyn Fn(ProgressUpdate) + Send + Sync)) -> Self {
        self.observer = Some(observer);
        self
    }
}

/// Runs the configured phases against rule content and aggregates findings.
///
/// The cache is an injected collaborator: clones of one `ResultCache`
/// share entries across orchestrator instances in the same process.
pub struct Orchestrator<E> {
    executor: E,
    cache: ResultCache,
    config: OrchestratorConfig,
    run_seq: AtomicU64,
}

impl<E: PhaseExecutor> Orchestrator<E> {
    pub fn new(executor: E, cache: ResultCache, config: OrchestratorConfig) -> Self {
        Self {
            executor,
            cache,
            config,
            run_seq: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Highest run sequence number handed out so far.
    ///
    /// Concurrent runs supersede rather than cancel each other; consumers
    /// compare a run's `seq` against this to discard stale results.
    pub fn latest_seq(&self) -> u64 {
        self.run_seq.load(Ordering::SeqCst)
    }

    /// Execute all requested phases for the content.
    ///
    /// Remote failures never escape: each failed phase contributes one
    /// synthetic critical finding and the run keeps going. The returned
    /// run is always `Completed` or `Error`, never `Running`.
    pub async fn run(&self, request: RunRequest<'_>) -> VigilResult<OrchestrationRun> {
        validate_request(&request)?;

        let seq = self.run_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if self.config.cache_results {
            if let Some(findings) = self.cache.get(request.content, request.language) {
                tracing::debug!("orchestrator: run {seq} served from cache");
                return Ok(completed_from_cache(seq, request.phases, findings));
            }
        }

        let mut run = OrchestrationRun {
            id: Uuid::new_v4().to_string(),
            seq,
            started_at: Utc::now(),
            ended_at: None,
            phase_order: request.phases.to_vec(),
            findings: Vec::new(),
            current_phase: None,
            progress_percent: 0.0,
            status: RunStatus::Running,
            summary: RunSummary::default(),
        };

        let options = PhaseOptions {
            timeout: self.config.phase_timeout(),
            strict: self.config.strict,
        };
        let phase_count = request.phases.len();
        let mut aborted = false;

        for (index, &phase) in request.phases.iter().enumerate() {
            run.current_phase = Some(phase);
            run.progress_percent = (index + 1) as f64 / phase_count as f64 * 100.0;
            if let Some(observer) = request.observer {
                observer(ProgressUpdate {
                    seq,
                    phase,
                    phase_index: index,
                    phase_count,
                    progress_percent: run.progress_percent,
                });
            }

            let appended_from = run.findings.len();
            let started = Instant::now();
            match self
                .executor
                .execute(phase, request.content, request.language, &options)
                .await
            {
                Ok(findings) => {
                    tracing::debug!("orchestrator: {} produced {} findings", phase, findings.len());
                    run.findings.extend(findings);
                }
                Err(err) => {
                    // Error isolation: the failure becomes a finding for
                    // this phase and execution continues.
                    tracing::warn!("orchestrator: {phase} failed, continuing: {err}");
                    run.findings.push(Finding::system_error(
                        phase,
                        err.to_string(),
                        started.elapsed().as_millis() as u64,
                    ));
                }
            }

            let blocking = run.findings[appended_from..]
                .iter()
                .any(|f| f.severity.is_blocking());
            if self.config.stop_on_failure && blocking {
                tracing::warn!("orchestrator: blocking finding in {phase}, aborting run {seq}");
                aborted = true;
                break;
            }
        }

        run.summary = RunSummary::from_findings(&run.findings);
        run.ended_at = Some(Utc::now());
        run.status = if aborted {
            RunStatus::Error
        } else {
            RunStatus::Completed
        };

        // An aborted run holds a truncated view of the content, so only
        // fully completed runs populate the cache.
        if !aborted && self.config.cache_results {
            self.cache.put(
                request.content,
                request.language,
                run.findings.clone(),
                self.config.cache_ttl(),
            );
        }

        tracing::info!(
            "orchestrator: run {seq} {} with {} findings",
            if aborted { "aborted" } else { "completed" },
            run.findings.len()
        );
        Ok(run)
    }
}

/// Pre-flight checks. Everything here fails before any phase call.
fn validate_request(request: &RunRequest<'_>) -> Result<(), ConfigurationError> {
    if request.content.trim().is_empty() {
        return Err(ConfigurationError::EmptyContent);
    }
    if request.phases.is_empty() {
        return Err(ConfigurationError::EmptyPhaseOrder);
    }

    // Phases may be omitted but never reordered or repeated.
    let mut last_rank: Option<usize> = None;
    for phase in request.phases {
        let rank = phase.rank();
        if let Some(prev) = last_rank {
            if rank <= prev {
                return Err(ConfigurationError::PhaseOrderViolation {
                    phase: phase.to_string(),
                });
            }
        }
        last_rank = Some(rank);
    }
    Ok(())
}

/// Build a completed run from cached findings. No phases execute.
fn completed_from_cache(seq: u64, phases: &[Phase], findings: Vec<Finding>) -> OrchestrationRun {
    let now = Utc::now();
    let summary = RunSummary::from_findings(&findings);
    OrchestrationRun {
        id: Uuid::new_v4().to_string(),
        seq,
        started_at: now,
        ended_at: Some(now),
        phase_order: phases.to_vec(),
        findings,
        current_phase: None,
        progress_percent: 100.0,
        status: RunStatus::Completed,
        summary,
    }
}
