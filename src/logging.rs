//! Leveled logging to a file
//!
//! The TUI owns the terminal, so log lines are appended to
//! `fbudget.log` in the base directory. The threshold comes from
//! [`Settings::log_level`] unless `RUST_LOG` is set.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{BudgetPaths, LogLevel};
use crate::error::{BudgetError, BudgetResult};

/// Build the filter for a threshold, letting `RUST_LOG` win when present
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Install the global subscriber writing to the log file
pub fn init_logging(paths: &BudgetPaths, level: LogLevel) -> BudgetResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| BudgetError::Config(format!("Failed to initialize tracing: {}", e)))?;

    tracing::debug!(threshold = %level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_follows_threshold() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        use tracing::level_filters::LevelFilter;

        assert_eq!(
            env_filter(LogLevel::Warn).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            env_filter(LogLevel::Debug).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
