/// Per-resource controller orchestrating "serve cached or refetch"
///
/// A controller owns one resource key, the fetch source for it, and the
/// effective refresh interval. The fresh path never touches the source and
/// never awaits I/O. The stale path serializes refreshes through a per-key
/// lock so concurrent callers coalesce into a single fetch: whoever gets
/// the lock first fetches, everyone queued behind re-checks freshness and
/// serves the stored result.
///
/// Failure policy: a failed fetch leaves the previous payload and
/// timestamp untouched and always propagates an `UpstreamFetch` error.
/// Whether to fall back to anything is the route handler's decision, not
/// the cache's.
use crate::config::DashboardVariant;
use crate::errors::{DashboardError, DashboardResult};
use crate::freshness::{self, ResourceKind};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::Arc;

use super::store::ResourceStore;

/// Request parameters forwarded to fetch sources
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    /// Requested cap for list-shaped payloads; the route layer applies it
    /// after retrieval so the cache always holds the full dataset
    pub limit: Option<usize>,
    /// Presentation variant feeding the demo generators
    pub variant: DashboardVariant,
}

/// Caller-supplied producer of fresh payloads, opaque to the cache
#[async_trait]
pub trait FetchSource: Send + Sync {
    async fn fetch(&self, params: &FetchParams) -> DashboardResult<Value>;
}

/// What a controller hands back for one request
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    pub payload: Value,
    pub last_updated: DateTime<Utc>,
    /// False when the payload came straight from the store
    pub was_refreshed: bool,
}

pub struct ResourceController {
    kind: ResourceKind,
    interval: Duration,
    store: Arc<ResourceStore>,
    source: Arc<dyn FetchSource>,
}

impl ResourceController {
    pub fn new(
        kind: ResourceKind,
        interval: Duration,
        store: Arc<ResourceStore>,
        source: Arc<dyn FetchSource>,
    ) -> Self {
        Self {
            kind,
            interval,
            store,
            source,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Effective refresh interval (config override or policy default)
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When data updated at `last_updated` goes stale
    pub fn next_refresh(&self, last_updated: DateTime<Utc>) -> DateTime<Utc> {
        last_updated + self.interval
    }

    fn is_stale(&self, last_updated: Option<DateTime<Utc>>) -> bool {
        freshness::needs_refresh_at(self.interval, last_updated, Utc::now())
    }

    /// Serve the resource: stored payload when fresh, one fetch when stale
    pub async fn handle_request(&self, params: &FetchParams) -> DashboardResult<ResourceResponse> {
        let key = self.kind.key();

        // Fresh path: no source call, no I/O
        if let Some(entry) = self.store.get(key) {
            if !self.is_stale(Some(entry.last_updated)) {
                self.store.record_hit();
                return Ok(ResourceResponse {
                    payload: entry.payload,
                    last_updated: entry.last_updated,
                    was_refreshed: false,
                });
            }
        }

        // Stale or absent: refreshes for this key run one at a time
        let lock = self.store.refresh_lock(key);
        let _guard = lock.lock().await;

        // Someone ahead of us may have refreshed while we waited
        if let Some(entry) = self.store.get(key) {
            if !self.is_stale(Some(entry.last_updated)) {
                self.store.record_coalesced();
                logger::debug(
                    LogTag::Cache,
                    &format!("'{}' refreshed by a concurrent request, serving it", key),
                );
                return Ok(ResourceResponse {
                    payload: entry.payload,
                    last_updated: entry.last_updated,
                    was_refreshed: false,
                });
            }
        }

        self.store.record_miss();
        logger::debug(LogTag::Cache, &format!("'{}' is stale, fetching", key));

        self.store.set_refreshing(key, true);
        let fetched = self.source.fetch(params).await;
        self.store.set_refreshing(key, false);

        match fetched {
            Ok(payload) => {
                let now = Utc::now();
                self.store.insert(key, payload.clone(), now);
                self.store.record_refresh();
                Ok(ResourceResponse {
                    payload,
                    last_updated: now,
                    was_refreshed: true,
                })
            }
            Err(err) => {
                // Previous payload and timestamp stay exactly as they were
                self.store.record_refresh_failure();
                logger::warning(
                    LogTag::Cache,
                    &format!("refresh failed for '{}': {}", key, err),
                );
                match err {
                    already @ DashboardError::UpstreamFetch { .. } => Err(already),
                    other => Err(DashboardError::upstream(key, other)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Fetch source that counts invocations and pops scripted results
    struct ScriptedSource {
        calls: AtomicUsize,
        results: Mutex<Vec<DashboardResult<Value>>>,
        delay: Option<std::time::Duration>,
    }

    impl ScriptedSource {
        fn new(results: Vec<DashboardResult<Value>>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                results: Mutex::new(results),
                delay: None,
            })
        }

        fn slow(
            results: Vec<DashboardResult<Value>>,
            delay: std::time::Duration,
        ) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                results: Mutex::new(results),
                delay: Some(delay),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FetchSource for ScriptedSource {
        async fn fetch(&self, _params: &FetchParams) -> DashboardResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                return Ok(json!({"exhausted": true}));
            }
            results.remove(0)
        }
    }

    fn controller(
        interval_ms: i64,
        store: &Arc<ResourceStore>,
        source: &Arc<ScriptedSource>,
    ) -> ResourceController {
        ResourceController::new(
            ResourceKind::ProtocolMetrics,
            Duration::milliseconds(interval_ms),
            Arc::clone(store),
            Arc::clone(source) as Arc<dyn FetchSource>,
        )
    }

    #[tokio::test]
    async fn fresh_data_is_served_without_fetching() {
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Ok(json!({"tvl": 999}))]);
        let ctl = controller(1_800_000, &store, &source);

        store.insert("protocol-metrics", json!({"tvl": 100}), Utc::now());

        let response = ctl.handle_request(&FetchParams::default()).await.unwrap();
        assert_eq!(source.call_count(), 0);
        assert!(!response.was_refreshed);
        assert_eq!(response.payload, json!({"tvl": 100}));
    }

    #[tokio::test]
    async fn stale_data_triggers_exactly_one_fetch() {
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Ok(json!({"tvl": 100}))]);
        let ctl = controller(1_800_000, &store, &source);

        let before = Utc::now();
        let response = ctl.handle_request(&FetchParams::default()).await.unwrap();

        assert_eq!(source.call_count(), 1);
        assert!(response.was_refreshed);
        assert_eq!(response.payload, json!({"tvl": 100}));
        assert!(response.last_updated >= before);

        let entry = store.get("protocol-metrics").unwrap();
        assert_eq!(entry.payload, json!({"tvl": 100}));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_previous_entry_untouched() {
        let store = Arc::new(ResourceStore::new());
        let stale_at = Utc::now() - Duration::hours(2);
        store.insert("protocol-metrics", json!({"tvl": 100}), stale_at);

        let source = ScriptedSource::new(vec![Err(DashboardError::upstream(
            "protocol-metrics",
            "feed down",
        ))]);
        let ctl = controller(1_800_000, &store, &source);

        let err = ctl
            .handle_request(&FetchParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::UpstreamFetch { .. }));

        // stale-but-available: nothing was overwritten
        let entry = store.get("protocol-metrics").unwrap();
        assert_eq!(entry.payload, json!({"tvl": 100}));
        assert_eq!(entry.last_updated, stale_at);
        assert!(!store.is_refreshing("protocol-metrics"));
        assert_eq!(store.metrics().refresh_failures, 1);
    }

    #[tokio::test]
    async fn failure_with_no_prior_entry_propagates_and_stores_nothing() {
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Err(DashboardError::upstream(
            "protocol-metrics",
            "cold start failure",
        ))]);
        let ctl = controller(1_800_000, &store, &source);

        let err = ctl
            .handle_request(&FetchParams::default())
            .await
            .unwrap_err();
        assert!(err.is_upstream());
        assert!(store.get("protocol-metrics").is_none());
        assert!(!store.is_refreshing("protocol-metrics"));
    }

    #[tokio::test]
    async fn zero_interval_means_every_read_is_stale() {
        // elapsed == interval counts as stale, so a zero interval refetches
        // on every call: the >= boundary choice observed end to end
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Ok(json!({"n": 1})), Ok(json!({"n": 2}))]);
        let ctl = controller(0, &store, &source);

        let first = ctl.handle_request(&FetchParams::default()).await.unwrap();
        let second = ctl.handle_request(&FetchParams::default()).await.unwrap();

        assert_eq!(source.call_count(), 2);
        assert_eq!(first.payload, json!({"n": 1}));
        assert_eq!(second.payload, json!({"n": 2}));
    }

    #[tokio::test]
    async fn fresh_reads_are_idempotent() {
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Ok(json!({"pools": [1, 2, 3]}))]);
        let ctl = controller(1_800_000, &store, &source);

        let first = ctl.handle_request(&FetchParams::default()).await.unwrap();
        assert!(first.was_refreshed);

        for _ in 0..5 {
            let read = ctl.handle_request(&FetchParams::default()).await.unwrap();
            assert!(!read.was_refreshed);
            assert_eq!(read.payload, first.payload);
            assert_eq!(read.last_updated, first.last_updated);
        }
        assert_eq!(source.call_count(), 1);
        assert_eq!(store.metrics().hits, 5);
    }

    #[tokio::test]
    async fn concurrent_stale_requests_coalesce_into_one_fetch() {
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::slow(
            vec![Ok(json!({"tvl": 42}))],
            std::time::Duration::from_millis(100),
        );
        let ctl = Arc::new(controller(1_800_000, &store, &source));

        let a = {
            let ctl = Arc::clone(&ctl);
            tokio::spawn(async move { ctl.handle_request(&FetchParams::default()).await })
        };
        let b = {
            let ctl = Arc::clone(&ctl);
            tokio::spawn(async move { ctl.handle_request(&FetchParams::default()).await })
        };

        let first = a.await.unwrap().unwrap();
        let second = b.await.unwrap().unwrap();

        assert_eq!(source.call_count(), 1);
        assert_eq!(first.payload, json!({"tvl": 42}));
        assert_eq!(second.payload, first.payload);
        // exactly one of the two performed the refresh
        assert_eq!(
            [first.was_refreshed, second.was_refreshed]
                .iter()
                .filter(|r| **r)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn thirty_minute_scenario() {
        // Compressed version of the protocol-metrics walkthrough: fetch at
        // t=0, cached read inside the window, refetch after it closes.
        let store = Arc::new(ResourceStore::new());
        let source = ScriptedSource::new(vec![Ok(json!({"tvl": 100})), Ok(json!({"tvl": 150}))]);
        let ctl = controller(300, &store, &source);

        let first = ctl.handle_request(&FetchParams::default()).await.unwrap();
        assert!(first.was_refreshed);
        assert_eq!(first.payload, json!({"tvl": 100}));

        let cached = ctl.handle_request(&FetchParams::default()).await.unwrap();
        assert!(!cached.was_refreshed);
        assert_eq!(cached.payload, json!({"tvl": 100}));
        assert_eq!(source.call_count(), 1);

        tokio::time::sleep(std::time::Duration::from_millis(400)).await;

        let refreshed = ctl.handle_request(&FetchParams::default()).await.unwrap();
        assert!(refreshed.was_refreshed);
        assert_eq!(refreshed.payload, json!({"tvl": 150}));
        assert_eq!(source.call_count(), 2);
        assert!(refreshed.last_updated > first.last_updated);
    }
}
