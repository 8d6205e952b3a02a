/// Demo portfolio snapshot
use serde::Serialize;
use serde_json::Value;

use crate::config::DashboardVariant;

use super::{jitter, round2};

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPosition {
    pub pool: String,
    pub venue: String,
    pub deposited_usd: f64,
    pub current_value_usd: f64,
    pub fees_earned_usd: f64,
    pub share_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSnapshot {
    pub total_value_usd: f64,
    pub total_deposited_usd: f64,
    pub total_fees_earned_usd: f64,
    pub net_pnl_usd: f64,
    pub positions: Vec<PortfolioPosition>,
}

/// (pool, venue, deposited_usd, current_value_usd, fees_usd, share_pct)
const STANDARD_POSITIONS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("SOL/USDC", "Orca", 200_000.0, 214_300.0, 6_420.0, 0.42),
    ("JUP/USDC", "Meteora", 120_000.0, 131_800.0, 9_150.0, 1.32),
    ("SOL/mSOL", "Marinade", 300_000.0, 309_200.0, 4_890.0, 0.95),
    ("BONK/SOL", "Raydium", 45_000.0, 52_600.0, 5_310.0, 0.77),
    ("USDC/USDT", "Curve", 90_000.0, 91_100.0, 740.0, 0.05),
];

const CORPORATE_POSITIONS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("USDC/USDT", "Curve", 700_000.0, 706_900.0, 5_620.0, 0.38),
    ("USDC/DAI", "Curve", 400_000.0, 403_100.0, 2_910.0, 0.21),
    ("sDAI/USDC", "Maker PSM", 280_000.0, 284_400.0, 3_640.0, 0.09),
    ("USDY/USDC", "Ondo", 230_000.0, 233_300.0, 2_760.0, 0.33),
];

/// Build the portfolio payload (JSON object with totals plus positions)
pub fn generate_portfolio(variant: DashboardVariant) -> Value {
    let table = match variant {
        DashboardVariant::Standard => STANDARD_POSITIONS,
        DashboardVariant::Corporate => CORPORATE_POSITIONS,
    };

    let positions: Vec<PortfolioPosition> = table
        .iter()
        .map(
            |(pool, venue, deposited, value, fees, share)| PortfolioPosition {
                pool: pool.to_string(),
                venue: venue.to_string(),
                deposited_usd: *deposited,
                current_value_usd: round2(jitter(*value, 0.01)),
                fees_earned_usd: round2(jitter(*fees, 0.02)),
                share_pct: *share,
            },
        )
        .collect();

    let total_deposited: f64 = positions.iter().map(|p| p.deposited_usd).sum();
    let total_value: f64 = positions.iter().map(|p| p.current_value_usd).sum();
    let total_fees: f64 = positions.iter().map(|p| p.fees_earned_usd).sum();

    let snapshot = PortfolioSnapshot {
        total_value_usd: round2(total_value),
        total_deposited_usd: round2(total_deposited),
        total_fees_earned_usd: round2(total_fees),
        net_pnl_usd: round2(total_value - total_deposited),
        positions,
    };
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}
