/// Portfolio routes
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    freshness::ResourceKind,
    webserver::{state::AppState, utils::respond_resource},
};

/// Create portfolio routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(portfolio))
}

/// GET /api/portfolio
async fn portfolio(State(state): State<Arc<AppState>>) -> Response {
    respond_resource(&state, ResourceKind::Portfolio, None).await
}
