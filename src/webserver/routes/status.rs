/// Health and cache status routes
use axum::{extract::State, response::Response, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    arguments::is_debug_webserver_enabled,
    cache::CacheMetrics,
    freshness::ResourceKind,
    logger::{self, LogTag},
    webserver::{state::AppState, utils::success_response},
};

/// Simple health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub variant: String,
}

/// Per-resource freshness snapshot for the status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ResourceStatus {
    pub key: &'static str,
    pub refresh_interval_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_refresh: Option<DateTime<Utc>>,
    pub is_refreshing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStatusResponse {
    pub resources: Vec<ResourceStatus>,
    pub metrics: CacheMetrics,
    pub hit_rate: f64,
}

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/cache/status", get(cache_status))
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    if is_debug_webserver_enabled() {
        logger::debug(LogTag::Webserver, "Health check endpoint called");
    }

    success_response(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        variant: state.config.variant.as_str().to_string(),
    })
}

/// GET /api/cache/status
///
/// Freshness snapshot for every resource plus store-level metrics. Shows
/// even never-fetched resources (no timestamps, cold).
async fn cache_status(State(state): State<Arc<AppState>>) -> Response {
    let now = Utc::now();

    let resources: Vec<ResourceStatus> = ResourceKind::all()
        .iter()
        .map(|kind| {
            let controller = state.controller(*kind);
            let entry = state.store.get(kind.key());
            ResourceStatus {
                key: kind.key(),
                refresh_interval_ms: controller.interval().num_milliseconds(),
                last_updated: entry.as_ref().map(|e| e.last_updated),
                age_ms: entry
                    .as_ref()
                    .map(|e| now.signed_duration_since(e.last_updated).num_milliseconds()),
                next_refresh: entry.as_ref().map(|e| controller.next_refresh(e.last_updated)),
                is_refreshing: state.store.is_refreshing(kind.key()),
            }
        })
        .collect();

    let metrics = state.store.metrics();
    let hit_rate = metrics.hit_rate();

    success_response(CacheStatusResponse {
        resources,
        metrics,
        hit_rate,
    })
}
