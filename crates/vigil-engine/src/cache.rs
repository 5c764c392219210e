//! TTL result cache keyed by content hash.
//!
//! Keys are blake3 hashes over (language, content). Entries carry their own
//! TTL and expire lazily: a lookup that hits an entry past its TTL
//! invalidates it and reports a miss. `purge_expired` is the periodic
//! sweep for long-lived processes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache;

use vigil_core::config::CacheConfig;
use vigil_core::models::Finding;

/// One cached finding set with its own TTL.
#[derive(Debug, Clone)]
struct CacheEntry {
    findings: Vec<Finding>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) > self.ttl
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Hit/miss snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// TTL memoization of validation results.
///
/// Keys are content hashes, so identical (content, language) pairs share
/// an entry across orchestrators. Cloning shares the underlying cache;
/// pass an instance to each orchestrator explicitly instead of reaching
/// for a process-wide singleton.
#[derive(Clone)]
pub struct ResultCache {
    entries: Cache<String, CacheEntry>,
    counters: Arc<Counters>,
}

impl ResultCache {
    /// Create a new cache with the given capacity bound.
    pub fn new(config: CacheConfig) -> Self {
        let entries = Cache::builder().max_capacity(config.capacity).build();
        Self {
            entries,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Stable cache key over (language, content).
    ///
    /// blake3 keeps collision probability negligible; a collision would
    /// only surface as a spurious cache hit, but 256 bits makes that a
    /// non-concern.
    pub fn cache_key(content: &str, language: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(language.as_bytes());
        hasher.update(&[0]);
        hasher.update(content.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Look up cached findings. `None` when absent or expired.
    ///
    /// Reads never mutate a live entry; expired entries are invalidated
    /// on the way out.
    pub fn get(&self, content: &str, language: &str) -> Option<Vec<Finding>> {
        let key = Self::cache_key(content, language);
        match self.entries.get(&key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                self.entries.invalidate(&key);
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Some(entry) => {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("cache: hit for {}", &key[..12]);
                Some(entry.findings.clone())
            }
            None => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert findings under the content key. Last writer wins.
    pub fn put(&self, content: &str, language: &str, findings: Vec<Finding>, ttl: Duration) {
        let entry = CacheEntry {
            findings,
            created_at: Instant::now(),
            ttl,
        };
        self.entries.insert(Self::cache_key(content, language), entry);
    }

    /// Sweep out every expired entry.
    ///
    /// Lazy lookup expiry already keeps reads correct; this exists so
    /// long-lived processes can reclaim memory between lookups.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.as_ref().clone())
            .collect();
        for key in &expired {
            self.entries.invalidate(key);
        }
        if !expired.is_empty() {
            tracing::debug!("cache: purged {} expired entries", expired.len());
        }
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Hit/miss counts since construction.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use chrono::Utc;
    use vigil_core::models::{FindingCategory, FindingStatus, Severity};
    use vigil_core::phase::Phase;

    use super::*;

    fn make_finding(message: &str) -> Finding {
        Finding {
            id: "f1".to_string(),
            source_phase: Phase::Syntax,
            category: FindingCategory::Syntax,
            severity: Severity::Low,
            message: message.to_string(),
            location: None,
            status: FindingStatus::Passed,
            suggested_fix: None,
            execution_time_ms: 5,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn put_then_get_before_ttl() {
        let cache = ResultCache::default();
        let findings = vec![make_finding("ok")];
        cache.put("rule a", "sql", findings.clone(), Duration::from_secs(60));
        assert_eq!(cache.get("rule a", "sql"), Some(findings));
    }

    #[test]
    fn get_is_idempotent() {
        let cache = ResultCache::default();
        cache.put("rule a", "sql", vec![make_finding("ok")], Duration::from_secs(60));
        let first = cache.get("rule a", "sql");
        let second = cache.get("rule a", "sql");
        assert_eq!(first, second);
    }

    #[test]
    fn miss_when_absent() {
        let cache = ResultCache::default();
        assert_eq!(cache.get("never stored", "sql"), None);
    }

    #[test]
    fn expired_entry_misses_and_is_evicted() {
        let cache = ResultCache::default();
        cache.put("rule a", "sql", vec![make_finding("ok")], Duration::from_millis(40));
        thread::sleep(Duration::from_millis(80));
        assert_eq!(cache.get("rule a", "sql"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn language_is_part_of_the_key() {
        let cache = ResultCache::default();
        cache.put("rule a", "sql", vec![make_finding("sql result")], Duration::from_secs(60));
        assert_eq!(cache.get("rule a", "python"), None);
    }

    #[test]
    fn last_writer_wins() {
        let cache = ResultCache::default();
        cache.put("rule a", "sql", vec![make_finding("first")], Duration::from_secs(60));
        let second = vec![make_finding("second")];
        cache.put("rule a", "sql", second.clone(), Duration::from_secs(60));
        assert_eq!(cache.get("rule a", "sql"), Some(second));
    }

    #[test]
    fn purge_removes_only_expired_entries() {
        let cache = ResultCache::default();
        cache.put("stale", "sql", vec![make_finding("old")], Duration::from_millis(30));
        cache.put("fresh", "sql", vec![make_finding("new")], Duration::from_secs(60));
        thread::sleep(Duration::from_millis(60));

        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh", "sql").is_some());
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let cache = ResultCache::default();
        cache.put("rule a", "sql", vec![make_finding("ok")], Duration::from_secs(60));
        cache.get("rule a", "sql");
        cache.get("rule b", "sql");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn clear_empties_cache() {
        let cache = ResultCache::default();
        cache.put("a", "sql", vec![make_finding("a")], Duration::from_secs(60));
        cache.put("b", "sql", vec![make_finding("b")], Duration::from_secs(60));
        cache.clear();
        assert_eq!(cache.get("a", "sql"), None);
        assert_eq!(cache.get("b", "sql"), None);
    }
}
