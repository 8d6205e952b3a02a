/// Demo activity feed and protocol events
use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::{jitter, round2};

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: &'static str,
    pub pool: &'static str,
    pub amount_usd: f64,
    pub timestamp: String,
}

/// Recent desk actions: (kind, pool, amount_usd, minutes_ago)
const RECENT_ACTIVITY: &[(&str, &str, f64, i64)] = &[
    ("harvest", "SOL/USDC", 1_420.0, 12),
    ("rebalance", "JUP/USDC", 38_000.0, 47),
    ("deposit", "USDC/USDT", 50_000.0, 95),
    ("harvest", "SOL/mSOL", 890.0, 130),
    ("withdraw", "BONK/SOL", 12_500.0, 260),
    ("rebalance", "stETH/ETH", 74_000.0, 410),
    ("deposit", "SOL/USDC", 25_000.0, 530),
    ("harvest", "USDC/USDT", 310.0, 700),
    ("withdraw", "JUP/USDC", 9_800.0, 840),
    ("deposit", "sDAI/USDC", 120_000.0, 1_150),
];

/// Build the activities payload (JSON array, newest first)
pub fn generate_activities() -> Value {
    let now = Utc::now();
    let items: Vec<ActivityItem> = RECENT_ACTIVITY
        .iter()
        .map(|(kind, pool, amount, minutes_ago)| ActivityItem {
            id: Uuid::new_v4().to_string(),
            kind: *kind,
            pool: *pool,
            amount_usd: round2(jitter(*amount, 0.02)),
            timestamp: (now - Duration::minutes(*minutes_ago)).to_rfc3339(),
        })
        .collect();
    serde_json::to_value(items).unwrap_or(Value::Array(vec![]))
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolEvent {
    pub id: String,
    pub category: &'static str,
    pub title: &'static str,
    pub severity: &'static str,
    pub timestamp: String,
}

/// Protocol-level announcements: (category, title, severity, hours_ago)
const PROTOCOL_EVENTS: &[(&str, &str, &str, i64)] = &[
    ("governance", "LIP-42 fee switch vote passes", "info", 6),
    ("upgrade", "Router v2.4 deployed on mainnet", "info", 19),
    ("incident", "Oracle feed lag on wBTC/ETH resolved", "warning", 31),
    ("listing", "USDY/USDC pool added to managed set", "info", 54),
    ("governance", "Treasury diversification proposal opened", "info", 77),
    ("maintenance", "Indexer reindex completed", "info", 120),
];

/// Build the events payload (JSON array, newest first)
pub fn generate_events() -> Value {
    let now = Utc::now();
    let items: Vec<ProtocolEvent> = PROTOCOL_EVENTS
        .iter()
        .map(|(category, title, severity, hours_ago)| ProtocolEvent {
            id: Uuid::new_v4().to_string(),
            category: *category,
            title: *title,
            severity: *severity,
            timestamp: (now - Duration::hours(*hours_ago)).to_rfc3339(),
        })
        .collect();
    serde_json::to_value(items).unwrap_or(Value::Array(vec![]))
}
