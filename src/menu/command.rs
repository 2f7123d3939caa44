//! Closed sets of recognized menu inputs

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Scrape,
    Calculate,
    Exit,
}

impl Command {
    /// Maps a menu choice (`1`, `2`, `3`) to a command
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Scrape),
            "2" => Some(Self::Calculate),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Scraper export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Parses `csv` or `json`, ignoring case and surrounding whitespace
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
