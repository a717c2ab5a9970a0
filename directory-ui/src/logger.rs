//! Logging Infrastructure
//!
//! Structured logging setup. `RUST_LOG` takes precedence over the configured
//! level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Error returned when a global subscriber is already installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Initialize the logger from configuration
pub fn init_logger(config: &AppConfig) -> Result<(), InitError> {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> Result<(), InitError> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir exists
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "staff-directory");
            return subscriber.with_ansi(false).with_writer(file_appender).try_init();
        }
        eprintln!("log directory {} does not exist, logging to stdout", dir);
    }

    subscriber.try_init()
}
