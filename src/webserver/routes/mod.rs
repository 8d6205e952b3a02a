/// API route assembly
///
/// All resource endpoints live under `/api` and serve the standard
/// `{data, meta}` envelope through the freshness-gated cache.
use axum::Router;
use std::sync::Arc;

use crate::webserver::state::AppState;

pub mod activity;
pub mod market;
pub mod metrics;
pub mod pools;
pub mod portfolio;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(pools::routes())
        .merge(market::routes())
        .merge(metrics::routes())
        .merge(portfolio::routes())
        .merge(activity::routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = Arc::new(AppState::new(DashboardConfig::default()));
        create_router(state)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json(test_router(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["variant"], "standard");
    }

    #[tokio::test]
    async fn pools_come_wrapped_in_the_envelope() {
        let (status, body) = get_json(test_router(), "/api/pools").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].is_array());
        assert_eq!(body["meta"]["was_refreshed"], true);
        assert!(body["meta"]["last_updated"].is_string());
        assert!(body["meta"]["next_refresh"].is_string());
        assert!(body["meta"]["total"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn limit_truncates_but_total_reports_everything() {
        let (status, body) = get_json(test_router(), "/api/pools?limit=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert!(body["meta"]["total"].as_u64().unwrap() > 3);
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let router = test_router();

        let (_, first) = get_json(router.clone(), "/api/metrics/protocol").await;
        assert_eq!(first["meta"]["was_refreshed"], true);

        let (_, second) = get_json(router, "/api/metrics/protocol").await;
        assert_eq!(second["meta"]["was_refreshed"], false);
        assert_eq!(second["data"], first["data"]);
        assert_eq!(second["meta"]["last_updated"], first["meta"]["last_updated"]);
    }

    #[tokio::test]
    async fn cache_status_lists_every_resource() {
        let router = test_router();

        // warm one resource so the snapshot shows a mix of states
        let _ = get_json(router.clone(), "/api/portfolio").await;

        let (status, body) = get_json(router, "/api/cache/status").await;
        assert_eq!(status, StatusCode::OK);

        let resources = body["resources"].as_array().unwrap();
        assert_eq!(resources.len(), crate::freshness::ResourceKind::all().len());

        let portfolio = resources
            .iter()
            .find(|r| r["key"] == "portfolio")
            .unwrap();
        assert!(portfolio["last_updated"].is_string());

        let events = resources.iter().find(|r| r["key"] == "events").unwrap();
        assert!(events["last_updated"].is_null());
    }

    #[tokio::test]
    async fn unknown_routes_are_404() {
        let (status, _) = get_json(test_router(), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
