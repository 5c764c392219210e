//! Debounced orchestration: rapid edits coalesce into one run.

use std::sync::Arc;
use std::time::Duration;

use test_fixtures::MockPhaseExecutor;
use vigil_core::config::OrchestratorConfig;
use vigil_core::phase::Phase;
use vigil_engine::{Debouncer, Orchestrator, ResultCache, RunRequest};

#[tokio::test]
async fn rapid_edits_produce_a_single_run() {
    let debouncer = Debouncer::new();
    let orch = Arc::new(Orchestrator::new(
        MockPhaseExecutor::new(),
        ResultCache::default(),
        OrchestratorConfig::default(),
    ));

    // Five keystrokes inside one debounce window.
    for revision in 0..5 {
        let orch = Arc::clone(&orch);
        debouncer.schedule("rule-editor", Duration::from_millis(60), move || async move {
            let content = format!("mask(email) -- rev {revision}");
            let _ = orch
                .run(RunRequest::new(&content, "sql", &[Phase::Syntax]))
                .await;
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    tokio::time::sleep(Duration::from_millis(400)).await;

    // Only the last edit ran, and it ran exactly once.
    assert_eq!(orch.latest_seq(), 1);
    assert_eq!(orch.executor().call_count(), 1);
}

#[tokio::test]
async fn separate_editors_debounce_independently() {
    let debouncer = Debouncer::new();
    let orch = Arc::new(Orchestrator::new(
        MockPhaseExecutor::new(),
        ResultCache::default(),
        OrchestratorConfig::default(),
    ));

    for editor in ["editor-a", "editor-b"] {
        let orch = Arc::clone(&orch);
        debouncer.schedule(editor, Duration::from_millis(40), move || async move {
            let content = format!("rule from {editor}");
            let _ = orch
                .run(RunRequest::new(&content, "sql", &[Phase::Syntax]))
                .await;
        });
    }

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(orch.latest_seq(), 2);
}
