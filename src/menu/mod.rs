//! Interactive menu loop
//!
//! The menu is an explicit command loop: each recognized choice maps to one
//! handler, each handler runs to completion before the next prompt, and only
//! an explicit exit (or end of input) leaves the loop. Failures inside a
//! handler are reported and logged, then the loop resumes.

mod command;
mod prompt;

pub use command::{Command, ExportFormat};
pub use prompt::Prompter;

use crate::calculator::{format_number, parse_operand, Calculator, Operation, OperationRecord};
use crate::config::AppConfig;
use crate::headlines::{HeadlineScraper, SaveOutcome, WriteError};
use crate::storage::{HistoryStore, SqliteHistoryStore};
use crate::AppError;
use reqwest::Client;
use std::io::{BufRead, Write};

const BANNER: &str = "Welcome to the Multi-Functional Application!";
const OPTIONS: [&str; 4] = [
    "\nChoose an option:",
    "1. Web Scraper",
    "2. Calculator",
    "3. Exit",
];

/// The application's command loop
pub struct Menu<R, W> {
    config: AppConfig,
    client: Client,
    history_store: Box<dyn HistoryStore>,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu persisting history to the configured SQLite database
    pub fn new(config: AppConfig, client: Client, input: R, output: W) -> Self {
        let history_store = Box::new(SqliteHistoryStore::new(&config.storage.database_path));
        Self {
            config,
            client,
            history_store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Replaces the history backend
    pub fn with_history_store(mut self, store: Box<dyn HistoryStore>) -> Self {
        self.history_store = store;
        self
    }

    /// Consumes the menu and returns its output stream
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the loop until the user exits or input ends
    ///
    /// Only console I/O failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), AppError> {
        self.prompter.say(BANNER)?;

        loop {
            for line in OPTIONS {
                self.prompter.say(line)?;
            }

            let command = match self.prompter.ask("Enter your choice (1/2/3): ")? {
                Some(choice) => Command::parse(&choice),
                None => Some(Command::Exit),
            };

            let outcome = match command {
                Some(Command::Scrape) => self.run_scraper().await,
                Some(Command::Calculate) => self.run_calculator(),
                Some(Command::Exit) => break,
                None => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.report(&e)?,
            }
        }

        self.prompter.say("Exiting the application. Goodbye!")?;
        tracing::info!("Session ended");
        Ok(())
    }

    /// Fetch, extract and export headlines from one page
    async fn run_scraper(&mut self) -> Result<(), AppError> {
        let Some(url) = self.prompter.ask("Enter the URL to scrape: ")? else {
            return Ok(());
        };
        let Some(format_input) = self.prompter.ask("Choose output format (csv/json): ")? else {
            return Ok(());
        };

        let format = match ExportFormat::parse(&format_input) {
            Some(format) => format,
            None => {
                self.prompter.say("Invalid format. Defaulting to CSV.")?;
                ExportFormat::Csv
            }
        };

        let mut scraper = HeadlineScraper::new(url.trim());
        let document = match scraper.fetch(&self.client).await {
            Ok(document) => document,
            Err(e) => {
                self.prompter.say(&format!("Error fetching the URL: {}", e))?;
                return Ok(());
            }
        };
        scraper.extract(&document);

        let output = &self.config.output;
        std::fs::create_dir_all(&output.directory).map_err(WriteError::from)?;

        let outcome = match format {
            ExportFormat::Csv => scraper.save_to_csv(&output.csv_path())?,
            ExportFormat::Json => scraper.save_to_json(&output.json_path())?,
        };

        match outcome {
            SaveOutcome::Saved(path) => self
                .prompter
                .say(&format!("Data saved to {}", path.display()))?,
            SaveOutcome::NothingToSave => self.prompter.say("No data to save.")?,
        }

        Ok(())
    }

    /// One calculation, optionally persisted
    ///
    /// Each selection gets a fresh calculator, so its history holds at most
    /// the one operation made here.
    fn run_calculator(&mut self) -> Result<(), AppError> {
        let mut calculator = Calculator::new();

        let Some(first) = self.prompter.ask("Enter the first number: ")? else {
            return Ok(());
        };
        let a = parse_operand(&first)?;

        let Some(second) = self.prompter.ask("Enter the second number: ")? else {
            return Ok(());
        };
        let b = parse_operand(&second)?;

        let Some(operation_input) = self
            .prompter
            .ask("Choose operation (add/subtract/multiply/divide): ")?
        else {
            return Ok(());
        };
        let Ok(operation) = operation_input.parse::<Operation>() else {
            self.prompter.say("Invalid operation!")?;
            return Ok(());
        };

        let result = calculator.calculate(a, operation, b)?;
        self.prompter.say(&format!("Result: {}", format_number(result)))?;
        calculator.log_operation(OperationRecord::from_operation(a, operation, b, result));

        let Some(answer) = self.prompter.ask("Save history to database? (yes/no): ")? else {
            return Ok(());
        };
        if answer.trim().eq_ignore_ascii_case("yes") {
            self.history_store.persist(calculator.history())?;
            self.prompter.say("History saved to database.")?;
        }

        Ok(())
    }

    fn report(&mut self, error: &AppError) -> Result<(), AppError> {
        let message = match error {
            AppError::Calc(e) => e.to_string(),
            AppError::Write(e) => e.to_string(),
            AppError::Storage(e) => e.to_string(),
            other => other.to_string(),
        };

        tracing::error!("Error: {}", message);
        self.prompter.say(&format!("Error: {}", message))?;
        Ok(())
    }
}
