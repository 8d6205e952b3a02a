/// Shared application state for the webserver
///
/// Owns the resource store and one cache controller per dashboard
/// resource. Route handlers only ever talk to controllers; the store is
/// reachable for the status endpoint.
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{FetchParams, FetchSource, ResourceController, ResourceStore};
use crate::config::DashboardConfig;
use crate::freshness::ResourceKind;
use crate::sources::{DemoSource, LiveMarketSource};

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub store: Arc<ResourceStore>,
    controllers: Arc<HashMap<ResourceKind, Arc<ResourceController>>>,
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Build state from configuration: a fresh store plus one controller
    /// per resource, wiring the live market feed when configured
    pub fn new(config: DashboardConfig) -> Self {
        let store = Arc::new(ResourceStore::new());
        let mut controllers = HashMap::new();

        for kind in ResourceKind::all() {
            let source: Arc<dyn FetchSource> = match (kind, &config.market_feed_url) {
                (ResourceKind::MarketData, Some(url)) => Arc::new(LiveMarketSource::new(
                    url.clone(),
                    config.market_feed_timeout_secs,
                )),
                _ => Arc::new(DemoSource::new(*kind)),
            };

            controllers.insert(
                *kind,
                Arc::new(ResourceController::new(
                    *kind,
                    config.refresh_interval(*kind),
                    Arc::clone(&store),
                    source,
                )),
            );
        }

        Self {
            config: Arc::new(config),
            store,
            controllers: Arc::new(controllers),
            startup_time: Utc::now(),
        }
    }

    /// Controller for one resource kind
    ///
    /// Every kind gets a controller in `new`, so this cannot miss.
    pub fn controller(&self, kind: ResourceKind) -> Arc<ResourceController> {
        Arc::clone(
            self.controllers
                .get(&kind)
                .expect("controller registered for every resource kind"),
        )
    }

    /// Fetch params for a request, carrying the configured variant
    pub fn fetch_params(&self, limit: Option<usize>) -> FetchParams {
        FetchParams {
            limit,
            variant: self.config.variant,
        }
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.startup_time).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_controller() {
        let state = AppState::new(DashboardConfig::default());
        for kind in ResourceKind::all() {
            let controller = state.controller(*kind);
            assert_eq!(controller.kind(), *kind);
        }
    }

    #[test]
    fn refresh_overrides_reach_the_controller() {
        let mut config = DashboardConfig::default();
        config
            .refresh_overrides
            .insert("protocol-metrics".to_string(), 60_000);

        let state = AppState::new(config);
        let controller = state.controller(ResourceKind::ProtocolMetrics);
        assert_eq!(
            controller.interval(),
            chrono::Duration::milliseconds(60_000)
        );
    }
}
