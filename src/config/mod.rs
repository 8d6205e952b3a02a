/// Configuration loading for Liquiboard
///
/// Settings come from a TOML file (`liquiboard.toml` by default, or
/// `--config <path>`), with serde defaults for everything so a missing file
/// just means defaults. A malformed file is a startup error; silently
/// running with half-applied settings is worse than failing.
use crate::errors::{DashboardError, DashboardResult};
use crate::freshness::ResourceKind;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "liquiboard.toml";

/// Dashboard presentation variant
///
/// Changes the flavor of the demo datasets (DeFi pools vs. treasury/stable
/// pools), never the API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
    #[default]
    Standard,
    Corporate,
}

impl DashboardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardVariant::Standard => "standard",
            DashboardVariant::Corporate => "corporate",
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Bind host for the webserver
    pub host: String,
    /// Bind port for the webserver
    pub port: u16,
    /// Presentation variant feeding the demo generators
    pub variant: DashboardVariant,
    /// Live market feed URL; when unset the demo market source is used
    pub market_feed_url: Option<String>,
    /// Market feed request timeout in seconds
    pub market_feed_timeout_secs: u64,
    /// Per-resource refresh interval overrides in milliseconds,
    /// keyed by resource key ("protocol-metrics" = 1800000)
    pub refresh_overrides: HashMap<String, u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8090,
            variant: DashboardVariant::Standard,
            market_feed_url: None,
            market_feed_timeout_secs: 10,
            refresh_overrides: HashMap::new(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields defaults; an unreadable or malformed file is a
    /// configuration error.
    pub fn load(path: &Path) -> DashboardResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: DashboardConfig = toml::from_str(&raw).map_err(|e| {
            DashboardError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would misbehave at runtime
    fn validate(&self) -> DashboardResult<()> {
        for key in self.refresh_overrides.keys() {
            if ResourceKind::from_key(key).is_none() {
                return Err(DashboardError::Configuration(format!(
                    "unknown resource key in refresh_overrides: '{}'",
                    key
                )));
            }
        }
        if self.market_feed_timeout_secs == 0 {
            return Err(DashboardError::Configuration(
                "market_feed_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective refresh interval for a resource: override, or policy default
    pub fn refresh_interval(&self, kind: ResourceKind) -> Duration {
        match self.refresh_overrides.get(kind.key()) {
            Some(millis) => Duration::milliseconds(*millis as i64),
            None => kind.default_interval(),
        }
    }
}
