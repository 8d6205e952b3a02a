/// Structured error handling for Liquiboard
///
/// One crate-wide error enum with a `DashboardResult` alias. Upstream fetch
/// failures are never swallowed by the cache layer; route handlers decide
/// what to surface to clients.
use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A caller-supplied fetch source failed. The cache keeps any previously
    /// stored payload untouched and propagates this unchanged.
    #[error("upstream fetch failed for '{resource}': {reason}")]
    UpstreamFetch { resource: String, reason: String },

    /// Configuration file problems (unreadable or malformed TOML).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Webserver lifecycle failures (bind errors, serve errors).
    #[error("webserver error: {0}")]
    Webserver(String),
}

impl DashboardError {
    /// Wrap any displayable failure as an upstream fetch error for `resource`.
    pub fn upstream(resource: &str, reason: impl std::fmt::Display) -> Self {
        DashboardError::UpstreamFetch {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the error came from a fetch source rather than our own plumbing.
    pub fn is_upstream(&self) -> bool {
        matches!(self, DashboardError::UpstreamFetch { .. })
    }
}
