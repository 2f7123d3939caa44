//! Database schema definitions

/// SQL schema for the history database
pub const SCHEMA_SQL: &str = r#"
-- Calculator operations, append-only
CREATE TABLE IF NOT EXISTS history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    operation TEXT,
    result REAL
);
"#;

/// Creates the history table if it does not exist yet
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
