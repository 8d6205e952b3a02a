/// Live market feed source
///
/// Fetches the market-data payload from a configured HTTP endpoint instead
/// of the demo generator. Wired in only when `market_feed_url` is set in
/// the configuration; there is no silent fallback to demo data, a feed
/// failure propagates as an upstream fetch error and the route decides
/// what to surface.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::cache::{FetchParams, FetchSource};
use crate::errors::{DashboardError, DashboardResult};
use crate::freshness::ResourceKind;
use crate::logger::{self, LogTag};

pub struct LiveMarketSource {
    client: Client,
    feed_url: String,
    timeout: Duration,
}

impl LiveMarketSource {
    pub fn new(feed_url: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            feed_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl FetchSource for LiveMarketSource {
    async fn fetch(&self, _params: &FetchParams) -> DashboardResult<Value> {
        let key = ResourceKind::MarketData.key();
        logger::debug(
            LogTag::Market,
            &format!("fetching market feed from {}", self.feed_url),
        );

        let response = self
            .client
            .get(&self.feed_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DashboardError::upstream(key, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::upstream(
                key,
                format!("feed returned HTTP {}", status),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DashboardError::upstream(key, format!("invalid feed body: {}", e)))?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_feed_is_an_upstream_error() {
        // port 1 on localhost refuses connections immediately
        let source = LiveMarketSource::new("http://127.0.0.1:1/feed".to_string(), 1);
        let err = source.fetch(&FetchParams::default()).await.unwrap_err();
        assert!(matches!(err, DashboardError::UpstreamFetch { .. }));
        assert!(err.to_string().contains("market-data"));
    }
}
