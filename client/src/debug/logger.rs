//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL};

/// Initialize the logging system
///
/// Sets up:
/// - stderr output filtered by `RUST_LOG` (or the configured level)
/// - optional daily-rotated file output under `CLIENT_LOG_DIR`
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the program. Calling `init` twice leaves the first subscriber
/// in place.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(config.ansi);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_dir) = &config.log_dir else {
        let _ = registry.try_init();
        return None;
    };

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = registry.try_init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let _ = registry.with(file_layer).try_init();

    tracing::debug!(log_dir = %log_dir.display(), log_level = %config.log_level, "File logging initialized");

    Some(guard)
}
