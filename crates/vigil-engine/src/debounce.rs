//! Debounced triggering with explicit per-key state.
//!
//! Each key holds a generation counter. `schedule` bumps the generation
//! and arms a timer; when the timer fires, the action runs only if no
//! newer schedule superseded it in the meantime. Superseded schedules are
//! dropped silently: no callback, no error.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

/// Pending state for one key.
#[derive(Debug, Clone, Copy)]
struct PendingState {
    generation: u64,
}

/// Coalesces rapid triggers into one action per quiet period.
///
/// Keys are independent: scheduling on one key never disturbs another.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Arc<DashMap<String, PendingState>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay` of quiescence on `key`.
    ///
    /// Cancels any pending action for the same key; the last schedule
    /// within the window is the one that executes. Must be called from
    /// within a tokio runtime.
    pub fn schedule<F, Fut>(&self, key: &str, delay: Duration, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = {
            let mut entry = self
                .pending
                .entry(key.to_string())
                .or_insert(PendingState { generation: 0 });
            entry.generation += 1;
            entry.generation
        };

        let pending = Arc::clone(&self.pending);
        let key = key.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Atomically claim the slot; fails if a newer schedule or a
            // cancel won the race.
            let claimed = pending
                .remove_if(&key, |_, state| state.generation == generation)
                .is_some();
            if claimed {
                tracing::debug!("debounce: firing for key {key}");
                action().await;
            }
        });
    }

    /// Drop any pending action for `key` without running it.
    pub fn cancel(&self, key: &str) {
        if self.pending.remove(key).is_some() {
            tracing::debug!("debounce: cancelled key {key}");
        }
    }

    /// Number of keys with an armed timer.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
