//! Scrape-Calc main entry point
//!
//! This is the command-line interface for the Scrape-Calc menu application.

use anyhow::Context;
use clap::Parser;
use scrape_calc::config::load_or_default;
use scrape_calc::headlines::build_http_client;
use scrape_calc::logging::init_logging;
use scrape_calc::Menu;
use std::io;
use std::path::PathBuf;

/// Scrape-Calc: headline scraper and calculator
///
/// Starts an interactive menu offering a web scraper that exports `<h2>`
/// headlines to CSV or JSON, and a calculator that can save its history
/// to a local SQLite database.
#[derive(Parser, Debug)]
#[command(name = "scrape-calc")]
#[command(version)]
#[command(about = "Headline scraper and calculator menu", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase log file verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load default configuration".to_string(),
    })?;

    init_logging(&config.logging, cli.verbose)
        .with_context(|| format!("Failed to open log file {}", config.logging.file))?;

    match &cli.config {
        Some(path) => tracing::info!("Configuration loaded from: {}", path.display()),
        None => tracing::info!("Using default configuration"),
    }

    let client = build_http_client(&config.http).context("Failed to build HTTP client")?;

    let stdin = io::stdin();
    let mut menu = Menu::new(config, client, stdin.lock(), io::stdout());
    menu.run().await?;

    Ok(())
}
