//! Scrape-Calc: a console menu application
//!
//! This crate bundles two independent tools behind one interactive menu:
//! a headline scraper that fetches a page, extracts `<h2>` headlines and
//! writes them to CSV or JSON, and a four-function calculator that can
//! persist its operation history to SQLite.

pub mod calculator;
pub mod config;
pub mod headlines;
pub mod logging;
pub mod menu;
pub mod storage;

use thiserror::Error;

/// Main error type for Scrape-Calc operations
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] headlines::FetchError),

    #[error("Write error: {0}")]
    Write(#[from] headlines::WriteError),

    #[error("Calculator error: {0}")]
    Calc(#[from] calculator::CalcError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Scrape-Calc operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use calculator::{Calculator, Operation, OperationRecord};
pub use config::AppConfig;
pub use headlines::{HeadlineRecord, HeadlineScraper, SaveOutcome, NO_LINK};
pub use menu::{Command, Menu};
pub use storage::{HistoryStore, SqliteHistoryStore};
