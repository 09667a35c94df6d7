//! Keyed in-memory lookup cache
//!
//! Memoizes per-species lookup results (threats, summaries) for the life of
//! the process, so re-viewing a species while browsing does not repeat the
//! network calls. Keys are scientific names; invalidation is explicit.
//! Nothing is persisted across restarts: assessments are fetched fresh per
//! process by design.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// In-memory cache of display-ready lookup results, keyed by scientific name.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: Mutex<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LookupCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached value.
    pub fn get(&self, scientific_name: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(scientific_name.trim()) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %scientific_name, "Cache hit");
                Some(value.clone())
            },
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %scientific_name, "Cache miss");
                None
            },
        }
    }

    /// Store a value.
    pub fn set(&self, scientific_name: &str, value: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(scientific_name.trim().to_string(), value.into());
    }

    /// Return the cached value for a key, computing and storing it on a miss.
    pub async fn get_or_insert_with<F, Fut>(&self, scientific_name: &str, fetch: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = String>,
    {
        if let Some(value) = self.get(scientific_name) {
            return value;
        }
        let value = fetch().await;
        self.set(scientific_name, value.clone());
        value
    }

    /// Drop one entry. Returns whether it existed.
    pub fn invalidate(&self, scientific_name: &str) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(scientific_name.trim()).is_some()
    }

    /// Drop all entries. Returns how many were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let count = entries.len();
        entries.clear();
        count
    }

    /// Cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        CacheStats {
            entries: entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let cache = LookupCache::new();
        assert_eq!(cache.get("Panthera leo"), None);

        cache.set("Panthera leo", "Habitat Loss, Poaching");
        assert_eq!(
            cache.get("Panthera leo").as_deref(),
            Some("Habitat Loss, Poaching")
        );
    }

    #[test]
    fn test_keys_are_trimmed() {
        let cache = LookupCache::new();
        cache.set("  Panthera leo ", "value");
        assert_eq!(cache.get("Panthera leo").as_deref(), Some("value"));
    }

    #[test]
    fn test_invalidate() {
        let cache = LookupCache::new();
        cache.set("A", "1");
        assert!(cache.invalidate("A"));
        assert!(!cache.invalidate("A"));
        assert_eq!(cache.get("A"), None);
    }

    #[test]
    fn test_clear() {
        let cache = LookupCache::new();
        cache.set("A", "1");
        cache.set("B", "2");
        assert_eq!(cache.clear(), 2);
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let cache = LookupCache::new();
        cache.get("A");
        cache.set("A", "1");
        cache.get("A");
        cache.get("A");

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_get_or_insert_with_fetches_once() {
        use std::sync::atomic::AtomicUsize;

        let cache = LookupCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_insert_with("Hexanchus griseus", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    "threats".to_string()
                })
                .await;
            assert_eq!(value, "threats");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
