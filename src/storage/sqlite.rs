//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the HistoryStore
//! trait. No connection outlives a single `persist` call.

use crate::calculator::OperationRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{HistoryStore, StorageResult};
use rusqlite::{params, Connection, DropBehavior};
use std::path::{Path, PathBuf};

/// SQLite history backend
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    path: PathBuf,
}

impl SqliteHistoryStore {
    /// Creates a store for the database file at `path`
    ///
    /// Nothing is opened until the first `persist` call.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn persist(&mut self, history: &[OperationRecord]) -> StorageResult<usize> {
        let mut conn = Connection::open(&self.path)?;
        initialize_schema(&conn)?;

        // Rows inserted before a failure are kept rather than rolled back
        let mut tx = conn.transaction()?;
        tx.set_drop_behavior(DropBehavior::Commit);

        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO history (operation, result) VALUES (?1, ?2)")?;
            for record in history {
                stmt.execute(params![record.description, record.result])?;
            }
        }

        tx.commit()?;

        tracing::info!("History saved to database.");
        tracing::debug!("{} rows appended to {}", history.len(), self.path.display());
        Ok(history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_rows(path: &Path) -> Vec<(i64, String, f64)> {
        let conn = Connection::open(path).unwrap();
        let mut stmt = conn
            .prepare("SELECT id, operation, result FROM history ORDER BY id")
            .unwrap();
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        rows
    }

    fn table_exists(path: &Path) -> bool {
        let conn = Connection::open(path).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='history'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        count == 1
    }

    #[test]
    fn test_persist_empty_history_creates_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.db");
        let mut store = SqliteHistoryStore::new(&path);

        assert_eq!(store.persist(&[]).unwrap(), 0);
        assert!(table_exists(&path));
        assert!(load_rows(&path).is_empty());
    }

    #[test]
    fn test_persist_single_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.db");
        let mut store = SqliteHistoryStore::new(&path);

        store
            .persist(&[OperationRecord::new("3.0 add 4.0", 7.0)])
            .unwrap();

        assert_eq!(load_rows(&path), vec![(1, "3.0 add 4.0".to_string(), 7.0)]);
    }

    #[test]
    fn test_persist_is_append_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.db");
        let mut store = SqliteHistoryStore::new(&path);
        let history = vec![
            OperationRecord::new("1.0 add 1.0", 2.0),
            OperationRecord::new("6.0 divide 3.0", 2.0),
        ];

        store.persist(&history).unwrap();
        store.persist(&history[..1]).unwrap();

        let rows = load_rows(&path);
        let ids: Vec<i64> = rows.iter().map(|r| r.0).collect();
        let ops: Vec<&str> = rows.iter().map(|r| r.1.as_str()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ops, vec!["1.0 add 1.0", "6.0 divide 3.0", "1.0 add 1.0"]);
    }

    #[test]
    fn test_unopenable_path_is_error() {
        let dir = TempDir::new().unwrap();
        let mut store = SqliteHistoryStore::new(dir.path().join("missing").join("history.db"));
        assert!(store.persist(&[OperationRecord::new("x", 1.0)]).is_err());
    }

    #[test]
    fn test_path_accessor() {
        let store = SqliteHistoryStore::new("calc.db");
        assert_eq!(store.path(), Path::new("calc.db"));
    }
}
