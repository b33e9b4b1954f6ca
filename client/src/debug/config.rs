//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "client=debug,info")
    pub log_level: String,
    /// Directory for daily-rotated log files; `None` logs to stderr only
    pub log_dir: Option<PathBuf>,
    /// Emit ANSI colours on stderr
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: get("CLIENT_LOG_DIR").filter(|v| !v.is_empty()).map(PathBuf::from),
            ansi: get("NO_COLOR").is_none(),
        }
    }
}
