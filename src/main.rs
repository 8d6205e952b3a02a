use std::path::PathBuf;

use liquiboard::{
    arguments::{self, is_help_requested, print_help},
    config::{DashboardConfig, DEFAULT_CONFIG_PATH},
    logger::{self, LogTag},
    webserver,
};

/// Main entry point for Liquiboard
///
/// Loads configuration, applies command-line overrides, and runs the
/// webserver until Ctrl-C.
#[tokio::main]
async fn main() {
    logger::init();

    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 Liquiboard starting up...");

    let config_path = arguments::get_arg_value("--config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = match DashboardConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("{}", e));
            std::process::exit(1);
        }
    };

    // Command-line overrides beat the config file
    if let Some(port) = arguments::get_arg_value("--port") {
        match port.parse::<u16>() {
            Ok(parsed) => config.port = parsed,
            Err(_) => {
                logger::error(LogTag::Config, &format!("invalid --port value: {}", port));
                std::process::exit(1);
            }
        }
    }

    logger::info(
        LogTag::Config,
        &format!(
            "variant={} market_feed={}",
            config.variant.as_str(),
            config
                .market_feed_url
                .as_deref()
                .unwrap_or("demo generator")
        ),
    );

    // Ctrl-C triggers a graceful shutdown
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::info(LogTag::System, "Ctrl-C received, shutting down");
            webserver::shutdown();
        }
    });

    if let Err(e) = webserver::start_server(config).await {
        logger::error(LogTag::Webserver, &format!("{}", e));
        std::process::exit(1);
    }

    logger::info(LogTag::System, "Liquiboard stopped");
}
