/// In-memory store backing the freshness-gated fetch cache
///
/// Thread-safe, keyed by resource name. Holds the payload of the last
/// successful fetch plus its timestamp, an in-flight marker per key, and
/// per-key async locks used by controllers to coalesce concurrent
/// refreshes. Entries live for the process lifetime; staleness is decided
/// by the freshness policy, there is no eviction.
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

/// One cached resource: opaque payload plus freshness bookkeeping
#[derive(Debug, Clone)]
pub struct CachedResource {
    pub payload: Value,
    pub last_updated: DateTime<Utc>,
}

/// Snapshot of one entry for the cache status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CachedResourceInfo {
    pub key: String,
    pub last_updated: DateTime<Utc>,
    pub age_ms: i64,
    pub is_refreshing: bool,
}

/// Store-level counters for monitoring
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub refreshes: u64,
    pub refresh_failures: u64,
    pub coalesced: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Keyed resource store shared by all controllers
#[derive(Debug, Default)]
pub struct ResourceStore {
    entries: RwLock<HashMap<String, CachedResource>>,
    refreshing: RwLock<HashSet<String>>,
    // Per-key async locks; controllers hold one across the fetch await so
    // concurrent refreshes of the same key collapse into one.
    refresh_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    metrics: RwLock<CacheMetrics>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the entry for `key`, if any
    pub fn get(&self, key: &str) -> Option<CachedResource> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Store a freshly fetched payload (last-write-wins per key)
    pub fn insert(&self, key: &str, payload: Value, last_updated: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key.to_string(),
                CachedResource {
                    payload,
                    last_updated,
                },
            );
        }
    }

    /// Mark or clear the in-flight refresh flag for `key`
    pub fn set_refreshing(&self, key: &str, refreshing: bool) {
        if let Ok(mut set) = self.refreshing.write() {
            if refreshing {
                set.insert(key.to_string());
            } else {
                set.remove(key);
            }
        }
    }

    pub fn is_refreshing(&self, key: &str) -> bool {
        self.refreshing
            .read()
            .map(|set| set.contains(key))
            .unwrap_or(false)
    }

    /// Per-key lock serializing refreshes; created lazily on first use
    pub fn refresh_lock(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = match self.refresh_locks.lock() {
            Ok(locks) => locks,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Status snapshot of every entry, sorted by key for stable output
    pub fn snapshot(&self) -> Vec<CachedResourceInfo> {
        let now = Utc::now();
        let mut infos: Vec<CachedResourceInfo> = match self.entries.read() {
            Ok(entries) => entries
                .iter()
                .map(|(key, entry)| CachedResourceInfo {
                    key: key.clone(),
                    last_updated: entry.last_updated,
                    age_ms: now
                        .signed_duration_since(entry.last_updated)
                        .num_milliseconds(),
                    is_refreshing: self.is_refreshing(key),
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }

    // =========================================================================
    // METRICS
    // =========================================================================

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics
            .read()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn record_hit(&self) {
        if let Ok(mut m) = self.metrics.write() {
            m.hits += 1;
        }
    }

    pub fn record_miss(&self) {
        if let Ok(mut m) = self.metrics.write() {
            m.misses += 1;
        }
    }

    pub fn record_refresh(&self) {
        if let Ok(mut m) = self.metrics.write() {
            m.refreshes += 1;
        }
    }

    pub fn record_refresh_failure(&self) {
        if let Ok(mut m) = self.metrics.write() {
            m.refresh_failures += 1;
        }
    }

    pub fn record_coalesced(&self) {
        if let Ok(mut m) = self.metrics.write() {
            m.coalesced += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_get() {
        let store = ResourceStore::new();
        assert!(store.is_empty());
        assert!(store.get("liquidity-pools").is_none());

        let now = Utc::now();
        store.insert("liquidity-pools", json!({"pools": []}), now);

        let entry = store.get("liquidity-pools").unwrap();
        assert_eq!(entry.payload, json!({"pools": []}));
        assert_eq!(entry.last_updated, now);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_is_last_write_wins() {
        let store = ResourceStore::new();
        let t1 = Utc::now();
        let t2 = t1 + chrono::Duration::seconds(1);

        store.insert("market-data", json!({"price": 1}), t1);
        store.insert("market-data", json!({"price": 2}), t2);

        let entry = store.get("market-data").unwrap();
        assert_eq!(entry.payload, json!({"price": 2}));
        assert_eq!(entry.last_updated, t2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn refreshing_flag_toggles() {
        let store = ResourceStore::new();
        assert!(!store.is_refreshing("portfolio"));

        store.set_refreshing("portfolio", true);
        assert!(store.is_refreshing("portfolio"));

        store.set_refreshing("portfolio", false);
        assert!(!store.is_refreshing("portfolio"));
    }

    #[test]
    fn refresh_lock_is_shared_per_key() {
        let store = ResourceStore::new();
        let a = store.refresh_lock("events");
        let b = store.refresh_lock("events");
        let other = store.refresh_lock("activities");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &other));
    }

    #[test]
    fn snapshot_reports_age_and_refreshing() {
        let store = ResourceStore::new();
        let earlier = Utc::now() - chrono::Duration::seconds(5);
        store.insert("events", json!([]), earlier);
        store.set_refreshing("events", true);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].key, "events");
        assert!(snapshot[0].age_ms >= 5_000);
        assert!(snapshot[0].is_refreshing);
    }

    #[test]
    fn hit_rate_math() {
        let store = ResourceStore::new();
        assert_eq!(store.metrics().hit_rate(), 0.0);

        store.record_hit();
        store.record_hit();
        store.record_hit();
        store.record_miss();

        let metrics = store.metrics();
        assert_eq!(metrics.hits, 3);
        assert_eq!(metrics.misses, 1);
        assert!((metrics.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
