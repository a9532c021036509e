//! File-based logging.
//!
//! The terminal is owned by the TUI, so `tracing` output goes to a daily
//! rotated file instead of stdout/stderr.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingSettings, default_log_dir};

const LOG_FILE_PREFIX: &str = "minim";
const FALLBACK_LOG_DIR: &str = ".logs";

/// Directory log files are written to.
pub fn log_dir(settings: &LoggingSettings) -> PathBuf {
    settings
        .directory
        .clone()
        .or_else(default_log_dir)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_DIR))
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over `logging.filter`. The returned guard
/// flushes pending records on drop and must be kept alive.
pub fn init_logging(
    settings: &LoggingSettings,
) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let dir = log_dir(settings);
    std::fs::create_dir_all(&dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("minim=info,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_prefers_configured_directory() {
        let settings = LoggingSettings {
            directory: Some(PathBuf::from("/tmp/minim-logs")),
            ..LoggingSettings::default()
        };
        assert_eq!(log_dir(&settings), PathBuf::from("/tmp/minim-logs"));
    }
}
