//! SQLite-backed search history implementation.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use super::{HistoryError, SearchHistoryStore, HISTORY_LIMIT};

/// SQLite-backed search history store.
///
/// The per-user history is one JSON array column rather than one row per
/// term: the whole list is rewritten on every record, matching the
/// overwrite-the-document behavior of the original client storage.
pub struct SqliteSearchHistoryStore {
    conn: Mutex<Connection>,
}

impl SqliteSearchHistoryStore {
    /// Create a new SQLite history store, creating the database file and
    /// tables if needed.
    pub fn new(path: &Path) -> Result<Self, HistoryError> {
        let conn = Connection::open(path).map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite history store (useful for testing).
    pub fn in_memory() -> Result<Self, HistoryError> {
        let conn =
            Connection::open_in_memory().map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), HistoryError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS search_history (
                user_id TEXT PRIMARY KEY,
                terms TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        Ok(())
    }

    fn load_terms(conn: &Connection, user_id: &str) -> Result<Vec<String>, HistoryError> {
        use rusqlite::OptionalExtension;

        let terms_json: Option<String> = conn
            .query_row(
                "SELECT terms FROM search_history WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| HistoryError::Database(e.to_string()))?;

        match terms_json {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| HistoryError::Database(e.to_string()))
            }
            None => Ok(vec![]),
        }
    }
}

impl SearchHistoryStore for SqliteSearchHistoryStore {
    fn record(&self, user_id: &str, term: &str) -> Result<(), HistoryError> {
        let clean = term.trim().to_lowercase();
        if clean.is_empty() {
            return Ok(());
        }

        let conn = self.conn.lock().unwrap();

        let mut terms = Self::load_terms(&conn, user_id)?;
        terms.retain(|t| t != &clean);
        terms.insert(0, clean);
        terms.truncate(HISTORY_LIMIT);

        let terms_json =
            serde_json::to_string(&terms).map_err(|e| HistoryError::Database(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO search_history (user_id, terms)
            VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE SET terms = excluded.terms
            "#,
            params![user_id, terms_json],
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<String>, HistoryError> {
        let conn = self.conn.lock().unwrap();
        Self::load_terms(&conn, user_id)
    }
}
