/// Fetch sources plugged into the freshness-gated cache
///
/// Demo sources wrap the generators in `crate::demo`; the live market
/// source calls a configured HTTP price feed. The cache treats every
/// source as an opaque black box behind `FetchSource`.

pub mod market;

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::{FetchParams, FetchSource};
use crate::demo;
use crate::errors::DashboardResult;
use crate::freshness::ResourceKind;

pub use market::LiveMarketSource;

/// Demo source for one resource kind
///
/// One struct covers all kinds; the kind picks the generator. Generators
/// produce the full dataset, limiting is a route-layer view concern.
pub struct DemoSource {
    kind: ResourceKind,
}

impl DemoSource {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl FetchSource for DemoSource {
    async fn fetch(&self, params: &FetchParams) -> DashboardResult<Value> {
        let payload = match self.kind {
            ResourceKind::LiquidityPools => demo::pools::generate_pools(params.variant),
            ResourceKind::MarketData => demo::market::generate_market_data(),
            ResourceKind::ProtocolMetrics => demo::metrics::generate_protocol_metrics(),
            ResourceKind::RiskAssessment => demo::metrics::generate_risk_assessment(params.variant),
            ResourceKind::Portfolio => demo::portfolio::generate_portfolio(params.variant),
            ResourceKind::Activities => demo::activity::generate_activities(),
            ResourceKind::Events => demo::activity::generate_events(),
            ResourceKind::Performance => demo::market::generate_performance(),
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardVariant;

    #[tokio::test]
    async fn demo_source_covers_every_kind() {
        for kind in ResourceKind::all() {
            let source = DemoSource::new(*kind);
            let params = FetchParams {
                limit: None,
                variant: DashboardVariant::Standard,
            };
            let payload = source.fetch(&params).await.unwrap();
            assert!(!payload.is_null(), "empty payload for {}", kind);
        }
    }
}
