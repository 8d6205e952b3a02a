//! Structured logging for Liquiboard
//!
//! Provides level-specific logging functions with per-module debug gating:
//! - `--debug-<module>` flags enable Debug output for one tag
//! - `--verbose` enables everything
//!
//! ```rust
//! use liquiboard::logger::{self, LogTag};
//!
//! logger::info(LogTag::Webserver, "Server started");
//! logger::debug(LogTag::Cache, "Entry refreshed"); // only with --debug-cache
//! ```
//!
//! Call `logger::init()` once at startup (before any logging) so the
//! command-line debug flags are parsed.

mod config;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, is_debug_enabled_for_tag, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Messages above the minimum level threshold are dropped
/// 3. Debug level requires --debug-<module> for that tag (or --verbose)
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level && level != LogLevel::Debug {
        return false;
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    true
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }
    format::format_and_log(tag, level.as_str(), message);
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (default operational messages)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (gated by --debug-<module>)
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (gated by --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Verbose, message);
}
