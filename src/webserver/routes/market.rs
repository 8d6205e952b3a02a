/// Market data and performance routes
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    freshness::ResourceKind,
    webserver::{state::AppState, utils::respond_resource},
};

/// Create market routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market", get(market_data))
        .route("/market/performance", get(performance))
}

/// GET /api/market
async fn market_data(State(state): State<Arc<AppState>>) -> Response {
    respond_resource(&state, ResourceKind::MarketData, None).await
}

/// GET /api/market/performance
async fn performance(State(state): State<Arc<AppState>>) -> Response {
    respond_resource(&state, ResourceKind::Performance, None).await
}
