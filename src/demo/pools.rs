/// Demo liquidity pool datasets
///
/// Two showcase tables: the standard variant shows high-volume DeFi pools,
/// the corporate variant shows the conservative stable/treasury pools a
/// corporate treasury desk would hold.
use serde::Serialize;
use serde_json::Value;

use crate::config::DashboardVariant;

use super::{jitter, round2};

#[derive(Debug, Clone, Serialize)]
pub struct LiquidityPool {
    pub pair: String,
    pub venue: String,
    pub tvl_usd: f64,
    pub volume_24h_usd: f64,
    pub apy_pct: f64,
    pub our_share_pct: f64,
    pub il_risk: &'static str,
}

/// Standard variant showcase pools
/// (pair, venue, tvl_usd, volume_24h_usd, apy_pct, our_share_pct, il_risk)
const STANDARD_POOLS: &[(&str, &str, f64, f64, f64, f64, &str)] = &[
    ("SOL/USDC", "Orca", 48_200_000.0, 12_400_000.0, 14.2, 0.42, "medium"),
    ("ETH/USDC", "Uniswap v3", 212_000_000.0, 64_500_000.0, 9.8, 0.11, "medium"),
    ("wBTC/ETH", "Uniswap v3", 96_300_000.0, 18_200_000.0, 7.1, 0.08, "medium"),
    ("SOL/mSOL", "Marinade", 31_800_000.0, 2_100_000.0, 6.4, 0.95, "low"),
    ("JUP/USDC", "Meteora", 9_400_000.0, 5_800_000.0, 28.6, 1.32, "high"),
    ("BONK/SOL", "Raydium", 6_100_000.0, 8_900_000.0, 41.3, 0.77, "high"),
    ("USDC/USDT", "Curve", 184_000_000.0, 22_000_000.0, 3.2, 0.05, "low"),
    ("stETH/ETH", "Curve", 241_000_000.0, 9_700_000.0, 3.9, 0.04, "low"),
];

/// Corporate variant showcase pools: stables and yield-bearing treasuries
const CORPORATE_POOLS: &[(&str, &str, f64, f64, f64, f64, &str)] = &[
    ("USDC/USDT", "Curve", 184_000_000.0, 22_000_000.0, 3.2, 0.38, "low"),
    ("USDC/DAI", "Curve", 92_500_000.0, 8_300_000.0, 2.9, 0.21, "low"),
    ("USDC/EURC", "Uniswap v3", 14_700_000.0, 3_100_000.0, 4.1, 0.64, "low"),
    ("sDAI/USDC", "Maker PSM", 310_000_000.0, 12_800_000.0, 5.2, 0.09, "low"),
    ("USDY/USDC", "Ondo", 68_900_000.0, 1_900_000.0, 4.8, 0.33, "low"),
    ("stETH/ETH", "Curve", 241_000_000.0, 9_700_000.0, 3.9, 0.02, "low"),
];

/// Build the liquidity-pools payload (JSON array of pools)
pub fn generate_pools(variant: DashboardVariant) -> Value {
    let table = match variant {
        DashboardVariant::Standard => STANDARD_POOLS,
        DashboardVariant::Corporate => CORPORATE_POOLS,
    };

    let pools: Vec<LiquidityPool> = table
        .iter()
        .map(
            |(pair, venue, tvl, volume, apy, share, il_risk)| LiquidityPool {
                pair: pair.to_string(),
                venue: venue.to_string(),
                tvl_usd: round2(jitter(*tvl, 0.02)),
                volume_24h_usd: round2(jitter(*volume, 0.08)),
                apy_pct: round2(jitter(*apy, 0.05)),
                our_share_pct: *share,
                il_risk: *il_risk,
            },
        )
        .collect();

    serde_json::to_value(pools).unwrap_or(Value::Array(vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pools_are_an_array_with_expected_fields() {
        let payload = generate_pools(DashboardVariant::Standard);
        let pools = payload.as_array().unwrap();
        assert_eq!(pools.len(), STANDARD_POOLS.len());

        let first = &pools[0];
        assert_eq!(first["pair"], "SOL/USDC");
        assert!(first["tvl_usd"].as_f64().unwrap() > 0.0);
        assert!(first["apy_pct"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn corporate_variant_is_all_low_risk() {
        let payload = generate_pools(DashboardVariant::Corporate);
        for pool in payload.as_array().unwrap() {
            assert_eq!(pool["il_risk"], "low");
        }
    }
}
