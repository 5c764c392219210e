use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Debouncer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period before a trigger fires (milliseconds).
    pub window_ms: u64,
}

impl DebounceConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window_ms: defaults::DEFAULT_DEBOUNCE_MS,
        }
    }
}
