//! Storage traits and error types
//!
//! This module defines the trait interface for history backends and
//! associated error types.

use crate::calculator::OperationRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Append-only sink for calculator history
///
/// There is deliberately no read side: rows are written and never updated,
/// deleted or queried by the application.
pub trait HistoryStore {
    /// Appends one row per record, creating the table first if needed
    ///
    /// # Returns
    ///
    /// The number of rows written
    fn persist(&mut self, history: &[OperationRecord]) -> StorageResult<usize>;
}
