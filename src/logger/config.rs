/// Logger configuration with per-module debug gating
///
/// Built once at startup from command-line arguments:
/// - `--debug-<module>` enables Debug level for that tag
/// - `--verbose` enables Verbose level globally
/// - `--log-level <level>` overrides the minimum level threshold
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level that gets through (Error always does)
    pub min_level: LogLevel,
    /// Tags with Debug level enabled via --debug-<module>
    pub debug_tags: HashSet<&'static str>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Build the logger configuration from command-line arguments
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    if arguments::has_arg("--verbose") {
        config.min_level = LogLevel::Verbose;
    } else if let Some(level) = arguments::get_arg_value("--log-level") {
        if let Some(parsed) = LogLevel::parse(&level) {
            config.min_level = parsed;
        }
    }

    for tag in LogTag::all() {
        let flag = format!("--debug-{}", tag.to_debug_key());
        if arguments::has_arg(&flag) {
            config.debug_tags.insert(tag.to_debug_key());
        }
    }

    set_logger_config(config);
}

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_default()
}

pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Check whether Debug level output is enabled for a tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.min_level >= LogLevel::Debug || config.debug_tags.contains(tag.to_debug_key())
}

/// Serializes tests that mutate the global logger configuration
#[cfg(test)]
pub(crate) static TEST_CONFIG_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
