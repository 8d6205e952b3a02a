/// Freshness-gated fetch cache
///
/// The store keeps one entry per resource key with the timestamp of the
/// last successful fetch. Controllers wrap a fetch source per resource and
/// decide, per request, whether to serve the stored payload or invoke the
/// source again. Concurrent requests for the same stale key coalesce into
/// a single fetch.
///
/// The store is an explicit object handed to each controller, never a
/// module-level singleton, so tests run against isolated instances.

pub mod controller;
pub mod store;

pub use controller::{FetchParams, FetchSource, ResourceController, ResourceResponse};
pub use store::{CacheMetrics, CachedResource, CachedResourceInfo, ResourceStore};
