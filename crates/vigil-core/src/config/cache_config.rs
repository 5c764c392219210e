use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Result cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached result sets.
    pub capacity: u64,
    /// TTL applied when the caller does not pass one (milliseconds).
    pub default_ttl_ms: u64,
}

impl CacheConfig {
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            default_ttl_ms: defaults::DEFAULT_CACHE_TTL_MS,
        }
    }
}
