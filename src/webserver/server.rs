/// Axum webserver implementation
///
/// Main server lifecycle management including startup, shutdown, and
/// graceful termination.
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::{
    config::DashboardConfig,
    errors::{DashboardError, DashboardResult},
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Build the application router with middleware layers
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Start the webserver
///
/// This function blocks until the server is shut down.
pub async fn start_server(config: DashboardConfig) -> DashboardResult<()> {
    let host = config.host.clone();
    let port = config.port;

    logger::debug(
        LogTag::Webserver,
        &format!("🌐 Starting webserver on {}:{}", host, port),
    );

    let state = Arc::new(AppState::new(config));
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| DashboardError::Webserver(format!("invalid bind address: {}", e)))?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        let message = match e.kind() {
            std::io::ErrorKind::AddrInUse => format!(
                "failed to bind to {}: address already in use\n\
                 Another liquiboard instance is probably running. \
                 Stop it or pick a different port with --port.",
                addr
            ),
            std::io::ErrorKind::PermissionDenied => format!(
                "failed to bind to {}: permission denied\n\
                 Ports below 1024 need elevated privileges; pick a higher port.",
                addr
            ),
            _ => format!("failed to bind to {}: {}", addr, e),
        };
        DashboardError::Webserver(message)
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("✅ Listening on http://{}", addr),
    );
    logger::info(
        LogTag::Webserver,
        &format!("📊 API endpoints available at http://{}/api", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::info(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| DashboardError::Webserver(format!("server error: {}", e)))?;

    logger::info(LogTag::Webserver, "Webserver stopped");
    Ok(())
}

/// Request a graceful shutdown of the running server
pub fn shutdown() {
    SHUTDOWN_NOTIFY.notify_waiters();
}
