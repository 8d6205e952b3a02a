/// Protocol metrics and risk assessment routes
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    freshness::ResourceKind,
    webserver::{state::AppState, utils::respond_resource},
};

/// Create metrics routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics/protocol", get(protocol_metrics))
        .route("/metrics/risk", get(risk_assessment))
}

/// GET /api/metrics/protocol
async fn protocol_metrics(State(state): State<Arc<AppState>>) -> Response {
    respond_resource(&state, ResourceKind::ProtocolMetrics, None).await
}

/// GET /api/metrics/risk
async fn risk_assessment(State(state): State<Arc<AppState>>) -> Response {
    respond_resource(&state, ResourceKind::RiskAssessment, None).await
}
