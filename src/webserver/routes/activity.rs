/// Activity feed and protocol event routes
use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    freshness::ResourceKind,
    webserver::{state::AppState, utils::respond_resource},
};

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<usize>,
}

/// Create activity routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activity", get(activity_feed))
        .route("/activity/events", get(protocol_events))
}

/// GET /api/activity?limit=
async fn activity_feed(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Response {
    respond_resource(&state, ResourceKind::Activities, query.limit).await
}

/// GET /api/activity/events?limit=
async fn protocol_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Response {
    respond_resource(&state, ResourceKind::Events, query.limit).await
}
