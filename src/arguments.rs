/// Centralized argument handling for Liquiboard
///
/// Consolidates command-line argument parsing and debug-flag checking:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for the webserver and cache modules
/// - Value-flag helpers (--port, --config, ...)
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Webserver module debug mode
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Cache module debug mode
pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache")
}

/// Market feed debug mode
pub fn is_debug_market_enabled() -> bool {
    has_arg("--debug-market")
}

/// Help request
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Print usage information
pub fn print_help() {
    println!("Liquiboard - liquidity dashboard backend\n");
    println!("USAGE:");
    println!("  liquiboard [OPTIONS]\n");
    println!("OPTIONS:");
    println!("  --config <path>       Configuration file (default: liquiboard.toml)");
    println!("  --port <port>         Override listen port");
    println!("  --log-level <level>   Minimum log level (error|warn|info|debug|verbose)");
    println!("  --verbose             Enable verbose logging everywhere");
    println!("  --debug-webserver     Webserver diagnostic logging");
    println!("  --debug-cache         Cache diagnostic logging");
    println!("  --debug-market        Market feed diagnostic logging");
    println!("  -h, --help            Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_and_value_lookup() {
        set_cmd_args(vec![
            "liquiboard".to_string(),
            "--debug-cache".to_string(),
            "--port".to_string(),
            "9000".to_string(),
        ]);

        assert!(has_arg("--debug-cache"));
        assert!(is_debug_cache_enabled());
        assert!(!is_debug_webserver_enabled());
        assert_eq!(get_arg_value("--port"), Some("9000".to_string()));
        assert_eq!(get_arg_value("--config"), None);

        set_cmd_args(vec!["liquiboard".to_string()]);
    }
}
