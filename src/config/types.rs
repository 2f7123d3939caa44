use serde::Deserialize;

/// Main configuration structure for Scrape-Calc
///
/// Every table is optional; missing tables fall back to the built-in defaults,
/// which place files exactly where the interactive tool always has.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

/// Scraper export locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding the exported files, created on demand
    pub directory: String,

    /// File name of the CSV export inside `directory`
    #[serde(rename = "csv-file")]
    pub csv_file: String,

    /// File name of the JSON export inside `directory`
    #[serde(rename = "json-file")]
    pub json_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output".to_string(),
            csv_file: "data.csv".to_string(),
            json_file: "data.json".to_string(),
        }
    }
}

/// Calculator history database
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "calculator_history.db".to_string(),
        }
    }
}

/// Log file sink
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Path of the log file, appended to across runs
    pub file: String,

    /// Default level when neither `RUST_LOG` nor `-v` is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "app.log".to_string(),
            level: "info".to_string(),
        }
    }
}

/// HTTP client settings for the fetcher
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Overrides the default `scrape-calc/<version>` user agent
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Whole-request timeout; the client default applies when absent
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}
