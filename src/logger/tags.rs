/// Log tags identifying the subsystem a message came from
///
/// Each tag maps to a `--debug-<module>` command-line flag so diagnostic
/// output can be enabled per subsystem.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Webserver,
    Cache,
    Market,
    Demo,
    Config,
}

impl LogTag {
    /// Plain uppercase name used in log prefixes
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Webserver => "WEBSERVER",
            LogTag::Cache => "CACHE",
            LogTag::Market => "MARKET",
            LogTag::Demo => "DEMO",
            LogTag::Config => "CONFIG",
        }
    }

    /// Lowercase key used by the `--debug-<module>` flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Webserver => "webserver",
            LogTag::Cache => "cache",
            LogTag::Market => "market",
            LogTag::Demo => "demo",
            LogTag::Config => "config",
        }
    }

    /// All tags, for startup debug-flag scanning
    pub fn all() -> &'static [LogTag] {
        &[
            LogTag::System,
            LogTag::Webserver,
            LogTag::Cache,
            LogTag::Market,
            LogTag::Demo,
            LogTag::Config,
        ]
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
