/// Demo datasets for dashboard showcasing
///
/// Hardcoded realistic tables with small random jitter, so screenshots and
/// local development look alive without any upstream feed. Each generator
/// produces the JSON payload for one cacheable resource; the presentation
/// variant picks between the DeFi-flavored ("standard") and the
/// treasury-flavored ("corporate") datasets.
///
/// Generators are plain functions over `DashboardVariant`; the
/// `FetchSource` adapters that plug them into the cache live in
/// `crate::sources`.

pub mod activity;
pub mod market;
pub mod metrics;
pub mod pools;
pub mod portfolio;

use rand::Rng;

/// Multiply `base` by a random factor in [1 - spread, 1 + spread]
///
/// Keeps demo numbers moving between refreshes without drifting far from
/// the showcase values.
pub(crate) fn jitter(base: f64, spread: f64) -> f64 {
    let factor = 1.0 + rand::thread_rng().gen_range(-spread..=spread);
    base * factor
}

/// Round to two decimals for display-friendly JSON
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
