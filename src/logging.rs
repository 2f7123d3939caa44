//! Process-wide log sink
//!
//! Logging is initialized once in `main`, before the menu loop starts, and is
//! never torn down. Components only emit `tracing` events; none of them
//! installs or reconfigures a subscriber.

use crate::config::LoggingConfig;
use crate::AppError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Returns the filter directive for a verbosity count and configured level
///
/// `-v` flags take precedence over the configured level.
pub fn filter_directive(verbose: u8, level: &str) -> String {
    match verbose {
        0 => format!("scrape_calc={},warn", level.to_ascii_lowercase()),
        1 => "scrape_calc=debug,info".to_string(),
        2 => "scrape_calc=trace,debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber writing timestamped lines to the log file
///
/// `RUST_LOG`, when set, overrides both the verbosity count and the
/// configured level.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, &config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
