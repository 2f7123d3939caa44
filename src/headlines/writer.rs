//! CSV and JSON export of headline records
//!
//! Both writers overwrite their target unconditionally, except when there is
//! nothing to write: an empty record list never opens the file, so whatever
//! was there before stays untouched. The destination directory must exist.

use crate::headlines::csv::{parse_rows, write_row};
use crate::headlines::extractor::HeadlineRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSV_HEADER: [&str; 2] = ["title", "link"];

/// Errors that can occur while writing or reading exports
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV in {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// What a save call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Records were written to this path
    Saved(PathBuf),

    /// The record list was empty; no file was touched
    NothingToSave,
}

/// Writes records as CSV with a `title,link` header row
pub fn write_csv(records: &[HeadlineRecord], path: &Path) -> Result<SaveOutcome, WriteError> {
    if records.is_empty() {
        tracing::debug!("No headlines to write, leaving {} untouched", path.display());
        return Ok(SaveOutcome::NothingToSave);
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_row(&mut writer, &CSV_HEADER)?;
    for record in records {
        write_row(&mut writer, &[record.title.as_str(), record.link.as_str()])?;
    }
    writer.flush()?;

    tracing::info!("Data saved to {}", path.display());
    Ok(SaveOutcome::Saved(path.to_path_buf()))
}

/// Writes records as a JSON array indented with four spaces
pub fn write_json(records: &[HeadlineRecord], path: &Path) -> Result<SaveOutcome, WriteError> {
    if records.is_empty() {
        tracing::debug!("No headlines to write, leaving {} untouched", path.display());
        return Ok(SaveOutcome::NothingToSave);
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    writer.flush()?;

    tracing::info!("Data saved to {}", path.display());
    Ok(SaveOutcome::Saved(path.to_path_buf()))
}

/// Reads a file produced by [`write_csv`] back into records
pub fn read_csv_records(path: &Path) -> Result<Vec<HeadlineRecord>, WriteError> {
    let text = std::fs::read_to_string(path)?;
    let mut rows = parse_rows(&text).into_iter();

    let malformed = |message: String| WriteError::Malformed {
        path: path.to_path_buf(),
        message,
    };

    match rows.next() {
        Some(header) if header == CSV_HEADER => {}
        Some(header) => return Err(malformed(format!("unexpected header {:?}", header))),
        None => return Err(malformed("missing header row".to_string())),
    }

    rows.enumerate()
        .map(|(index, row)| match <[String; 2]>::try_from(row) {
            Ok([title, link]) => Ok(HeadlineRecord { title, link }),
            Err(row) => Err(malformed(format!(
                "row {} has {} fields, expected 2",
                index + 1,
                row.len()
            ))),
        })
        .collect()
}

/// Reads a file produced by [`write_json`] back into records
pub fn read_json_records(path: &Path) -> Result<Vec<HeadlineRecord>, WriteError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
