/// Response helpers for the API routes
///
/// Every cached resource is served in one envelope shape:
/// `{ "data": <payload>, "meta": { last_updated, was_refreshed,
/// next_refresh, total? } }`. Upstream fetch failures map to 502, other
/// failures to 500, both with a JSON error body.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::cache::ResourceController;
use crate::errors::DashboardError;
use crate::freshness::ResourceKind;
use crate::logger::{self, LogTag};
use crate::webserver::state::AppState;

/// Largest `limit` a client can ask for on list-shaped resources
pub const MAX_PAGE_SIZE: usize = 200;

/// Freshness metadata attached to every resource response
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMeta {
    pub last_updated: DateTime<Utc>,
    pub was_refreshed: bool,
    pub next_refresh: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

/// 200 with the standard resource envelope
pub fn envelope_response(data: Value, meta: ResponseMeta) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "data": data, "meta": meta })),
    )
        .into_response()
}

/// 200 with a bare JSON body (health, cache status)
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Error status with a JSON `{ "error": ... }` body
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Map a dashboard error to its HTTP response
pub fn dashboard_error_response(err: &DashboardError) -> Response {
    let status = if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, &err.to_string())
}

/// Truncate an array payload to `limit`, reporting the untruncated total
///
/// The cache always holds the full dataset; `limit` is a per-request view.
/// Non-array payloads pass through with no total.
pub fn apply_limit(payload: Value, limit: Option<usize>) -> (Value, Option<usize>) {
    match payload {
        Value::Array(items) => {
            let total = items.len();
            let capped = limit.map(|l| l.min(MAX_PAGE_SIZE)).unwrap_or(total);
            let view: Vec<Value> = items.into_iter().take(capped).collect();
            (Value::Array(view), Some(total))
        }
        other => (other, None),
    }
}

/// Shared resource handler: serve through the cache, build the envelope
pub async fn respond_resource(state: &AppState, kind: ResourceKind, limit: Option<usize>) -> Response {
    let controller: Arc<ResourceController> = state.controller(kind);
    let params = state.fetch_params(limit);

    match controller.handle_request(&params).await {
        Ok(resource) => {
            let (data, total) = apply_limit(resource.payload, limit);
            let meta = ResponseMeta {
                last_updated: resource.last_updated,
                was_refreshed: resource.was_refreshed,
                next_refresh: controller.next_refresh(resource.last_updated),
                total,
            };
            envelope_response(data, meta)
        }
        Err(err) => {
            logger::error(
                LogTag::Webserver,
                &format!("failed to serve '{}': {}", kind, err),
            );
            dashboard_error_response(&err)
        }
    }
}
