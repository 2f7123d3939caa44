//! Configuration module for Scrape-Calc
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, the defaults reproduce the classic
//! layout: `output/data.csv`, `output/data.json`, `calculator_history.db`
//! and `app.log` in the working directory.
//!
//! # Example
//!
//! ```no_run
//! use scrape_calc::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scrape-calc.toml")).unwrap();
//! println!("History database: {}", config.storage.database_path);
//! ```

mod parser;
mod types;
mod validation;

use std::path::PathBuf;

// Re-export types
pub use types::{AppConfig, HttpConfig, LoggingConfig, OutputConfig, StorageConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};

impl OutputConfig {
    /// Full path of the CSV export
    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.csv_file)
    }

    /// Full path of the JSON export
    pub fn json_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.json_file)
    }
}
