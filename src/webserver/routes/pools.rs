/// Liquidity pool routes
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
pub struct PoolsQuery {
    pub limit: Option<usize>,
}

/// Create pool routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/pools", get(list_pools))
}

/// GET /api/pools?limit=
async fn list_pools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PoolsQuery>,
) -> Response {
    respond_resource(&state, ResourceKind::LiquidityPools, query.limit).await
}
