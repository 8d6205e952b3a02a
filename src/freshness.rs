/// Data freshness policy for dashboard resources
///
/// Pure decision logic with no side effects: given a resource kind and the
/// timestamp of the last successful fetch, decide whether the stored data
/// needs refreshing. The boundary case (elapsed time exactly equal to the
/// interval) counts as stale.
use chrono::{DateTime, Duration, Utc};

// =============================================================================
// RESOURCE KINDS
// =============================================================================

/// Every cacheable dashboard resource, each with its own refresh interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    LiquidityPools,
    MarketData,
    ProtocolMetrics,
    RiskAssessment,
    Portfolio,
    Activities,
    Events,
    Performance,
}

/// Default refresh intervals in milliseconds
const INTERVAL_LIQUIDITY_POOLS_MS: i64 = 300_000; // 5 min
const INTERVAL_MARKET_DATA_MS: i64 = 60_000; // 1 min
const INTERVAL_PROTOCOL_METRICS_MS: i64 = 1_800_000; // 30 min
const INTERVAL_RISK_ASSESSMENT_MS: i64 = 900_000; // 15 min
const INTERVAL_PORTFOLIO_MS: i64 = 120_000; // 2 min
const INTERVAL_ACTIVITIES_MS: i64 = 30_000; // 30 sec
const INTERVAL_EVENTS_MS: i64 = 3_600_000; // 1 hour
const INTERVAL_PERFORMANCE_MS: i64 = 600_000; // 10 min

impl ResourceKind {
    /// Cache key for this resource ("liquidity-pools", "market-data", ...)
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::LiquidityPools => "liquidity-pools",
            ResourceKind::MarketData => "market-data",
            ResourceKind::ProtocolMetrics => "protocol-metrics",
            ResourceKind::RiskAssessment => "risk-assessment",
            ResourceKind::Portfolio => "portfolio",
            ResourceKind::Activities => "activities",
            ResourceKind::Events => "events",
            ResourceKind::Performance => "performance",
        }
    }

    /// Parse a cache key back into a kind
    pub fn from_key(key: &str) -> Option<Self> {
        ResourceKind::all().iter().copied().find(|k| k.key() == key)
    }

    /// All kinds, for configuration scanning and status reporting
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::LiquidityPools,
            ResourceKind::MarketData,
            ResourceKind::ProtocolMetrics,
            ResourceKind::RiskAssessment,
            ResourceKind::Portfolio,
            ResourceKind::Activities,
            ResourceKind::Events,
            ResourceKind::Performance,
        ]
    }

    /// Default refresh interval for this kind
    pub fn default_interval(&self) -> Duration {
        let millis = match self {
            ResourceKind::LiquidityPools => INTERVAL_LIQUIDITY_POOLS_MS,
            ResourceKind::MarketData => INTERVAL_MARKET_DATA_MS,
            ResourceKind::ProtocolMetrics => INTERVAL_PROTOCOL_METRICS_MS,
            ResourceKind::RiskAssessment => INTERVAL_RISK_ASSESSMENT_MS,
            ResourceKind::Portfolio => INTERVAL_PORTFOLIO_MS,
            ResourceKind::Activities => INTERVAL_ACTIVITIES_MS,
            ResourceKind::Events => INTERVAL_EVENTS_MS,
            ResourceKind::Performance => INTERVAL_PERFORMANCE_MS,
        };
        Duration::milliseconds(millis)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// =============================================================================
// FRESHNESS DECISIONS
// =============================================================================

/// Get the configured refresh interval for a resource kind
pub fn refresh_interval(kind: ResourceKind) -> Duration {
    kind.default_interval()
}

/// Decide whether data last updated at `last_updated` needs refreshing now
pub fn needs_refresh(kind: ResourceKind, last_updated: Option<DateTime<Utc>>) -> bool {
    needs_refresh_at(kind.default_interval(), last_updated, Utc::now())
}

/// Core decision, with the clock injected so the boundary is testable
///
/// Absent data always needs a refresh. Elapsed time exactly equal to the
/// interval counts as stale (`>=`, not `>`).
pub fn needs_refresh_at(
    interval: Duration,
    last_updated: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match last_updated {
        None => true,
        Some(ts) => now.signed_duration_since(ts) >= interval,
    }
}

/// Variant taking a raw RFC 3339 timestamp string
///
/// A malformed timestamp is treated as "needs refresh" (fail open toward
/// refreshing) rather than an error.
pub fn needs_refresh_raw(kind: ResourceKind, last_updated: Option<&str>) -> bool {
    let parsed = last_updated.and_then(parse_timestamp);
    needs_refresh(kind, parsed)
}

/// When the resource will next be considered stale, given its last update
///
/// Informational only (surfaced in response metadata); nothing schedules
/// work based on it.
pub fn next_refresh_time(kind: ResourceKind, last_updated: DateTime<Utc>) -> DateTime<Utc> {
    last_updated + kind.default_interval()
}

/// Parse an RFC 3339 timestamp, returning None on malformed input
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
