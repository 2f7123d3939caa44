use crate::config::types::{AppConfig, HttpConfig, LoggingConfig, OutputConfig, StorageConfig};
use crate::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validates the entire configuration
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    validate_output_config(&config.output)?;
    validate_storage_config(&config.storage)?;
    validate_logging_config(&config.logging)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates export locations
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    validate_file_name("csv-file", &config.csv_file)?;
    validate_file_name("json-file", &config.json_file)?;

    Ok(())
}

/// Export file names live inside the output directory and must not escape it
fn validate_file_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "{} must be a plain file name, got '{}'",
            key, name
        )));
    }

    Ok(())
}

fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if config.file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "log file cannot be empty".to_string(),
        ));
    }

    let level = config.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation(format!(
            "log level must be one of {}, got '{}'",
            LOG_LEVELS.join("/"),
            config.level
        )));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be empty when set".to_string(),
            ));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
