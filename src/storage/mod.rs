//! Storage module for persisting calculator history
//!
//! This module handles all database operations, including:
//! - SQLite schema creation for the `history` table
//! - Appending in-memory operation records as rows

mod schema;
mod sqlite;
mod traits;

pub use schema::{initialize_schema, SCHEMA_SQL};
pub use sqlite::SqliteHistoryStore;
pub use traits::{HistoryStore, StorageError, StorageResult};

