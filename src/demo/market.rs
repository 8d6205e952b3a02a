/// Demo market data and performance history
use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{jitter, round2};

/// Baseline market snapshot values
const DEMO_SOL_PRICE: f64 = 148.32;
const DEMO_ETH_PRICE: f64 = 3_241.70;
const DEMO_BTC_PRICE: f64 = 67_850.0;
const DEMO_DEFI_TVL: f64 = 96_400_000_000.0;
const DEMO_STABLE_MCAP: f64 = 161_200_000_000.0;
const DEMO_VOLUME_24H: f64 = 4_870_000_000.0;

#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub sol_price_usd: f64,
    pub eth_price_usd: f64,
    pub btc_price_usd: f64,
    pub defi_tvl_usd: f64,
    pub stablecoin_mcap_usd: f64,
    pub dex_volume_24h_usd: f64,
    pub trend: &'static str,
}

/// Build the market-data payload (JSON object)
pub fn generate_market_data() -> Value {
    let snapshot = MarketSnapshot {
        sol_price_usd: round2(jitter(DEMO_SOL_PRICE, 0.03)),
        eth_price_usd: round2(jitter(DEMO_ETH_PRICE, 0.02)),
        btc_price_usd: round2(jitter(DEMO_BTC_PRICE, 0.02)),
        defi_tvl_usd: round2(jitter(DEMO_DEFI_TVL, 0.01)),
        stablecoin_mcap_usd: round2(jitter(DEMO_STABLE_MCAP, 0.005)),
        dex_volume_24h_usd: round2(jitter(DEMO_VOLUME_24H, 0.1)),
        trend: "sideways",
    };
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformancePoint {
    pub date: String,
    pub fees_earned_usd: f64,
    pub il_usd: f64,
    pub net_apy_pct: f64,
}

/// Daily fee/IL curve used for the performance chart
/// (days_ago, fees_usd, il_usd, net_apy_pct)
const PERFORMANCE_CURVE: &[(i64, f64, f64, f64)] = &[
    (13, 412.0, -88.0, 7.9),
    (12, 388.0, -61.0, 8.1),
    (11, 505.0, -120.0, 8.8),
    (10, 471.0, -35.0, 9.4),
    (9, 363.0, -52.0, 7.2),
    (8, 428.0, -97.0, 7.7),
    (7, 540.0, -140.0, 9.1),
    (6, 602.0, -75.0, 10.6),
    (5, 488.0, -44.0, 9.3),
    (4, 451.0, -66.0, 8.5),
    (3, 530.0, -101.0, 9.0),
    (2, 575.0, -58.0, 10.2),
    (1, 496.0, -71.0, 8.9),
    (0, 509.0, -63.0, 9.2),
];

/// Build the performance payload (JSON array, oldest first)
pub fn generate_performance() -> Value {
    let today = Utc::now().date_naive();
    let points: Vec<PerformancePoint> = PERFORMANCE_CURVE
        .iter()
        .map(|(days_ago, fees, il, apy)| PerformancePoint {
            date: (today - Duration::days(*days_ago)).to_string(),
            fees_earned_usd: round2(jitter(*fees, 0.04)),
            il_usd: round2(jitter(*il, 0.04)),
            net_apy_pct: round2(jitter(*apy, 0.03)),
        })
        .collect();
    serde_json::to_value(points).unwrap_or(Value::Array(vec![]))
}
