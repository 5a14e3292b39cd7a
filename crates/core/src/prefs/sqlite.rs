//! SQLite-backed preference store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{PreferenceError, PreferenceStore};
use crate::feed::PreferenceSet;

/// SQLite-backed preference store. One row per user; the tag list is stored
/// as a JSON array of lower-cased strings.
pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    /// Create a new SQLite preference store, creating the database file and
    /// tables if needed.
    pub fn new(path: &Path) -> Result<Self, PreferenceError> {
        let conn = Connection::open(path).map_err(|e| PreferenceError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite preference store (useful for testing).
    pub fn in_memory() -> Result<Self, PreferenceError> {
        let conn =
            Connection::open_in_memory().map_err(|e| PreferenceError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), PreferenceError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                user_id TEXT PRIMARY KEY,
                categories TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| PreferenceError::Database(e.to_string()))?;

        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, user_id: &str) -> Result<PreferenceSet, PreferenceError> {
        let conn = self.conn.lock().unwrap();

        let categories_json: Option<String> = conn
            .query_row(
                "SELECT categories FROM preferences WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| PreferenceError::Database(e.to_string()))?;

        match categories_json {
            Some(json) => {
                let tags: Vec<String> = serde_json::from_str(&json)
                    .map_err(|e| PreferenceError::Database(e.to_string()))?;
                Ok(PreferenceSet::from_tags(tags))
            }
            None => Ok(PreferenceSet::new()),
        }
    }

    fn save(&self, user_id: &str, preferences: &PreferenceSet) -> Result<(), PreferenceError> {
        let conn = self.conn.lock().unwrap();

        let tags: Vec<&str> = preferences.tags().collect();
        let categories_json = serde_json::to_string(&tags)
            .map_err(|e| PreferenceError::Database(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO preferences (user_id, categories, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
                categories = excluded.categories,
                updated_at = excluded.updated_at
            "#,
            params![user_id, categories_json, Utc::now().to_rfc3339()],
        )
        .map_err(|e| PreferenceError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unsaved_user_is_empty() {
        let store = SqlitePreferenceStore::in_memory().unwrap();
        let prefs = store.get("alice").unwrap();
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_save_and_get() {
        let store = SqlitePreferenceStore::in_memory().unwrap();
        let prefs = PreferenceSet::from_tags(["Action", "shooter"]);

        store.save("alice", &prefs).unwrap();

        let loaded = store.get("alice").unwrap();
        assert_eq!(loaded, prefs);
        assert!(loaded.contains("action"));
    }

    #[test]
    fn test_save_overwrites() {
        let store = SqlitePreferenceStore::in_memory().unwrap();

        store
            .save("alice", &PreferenceSet::from_tags(["action", "racing"]))
            .unwrap();
        store
            .save("alice", &PreferenceSet::from_tags(["strategy"]))
            .unwrap();

        let loaded = store.get("alice").unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains("strategy"));
        assert!(!loaded.contains("action"));
    }

    #[test]
    fn test_save_empty_set_clears() {
        let store = SqlitePreferenceStore::in_memory().unwrap();

        store
            .save("alice", &PreferenceSet::from_tags(["action"]))
            .unwrap();
        store.save("alice", &PreferenceSet::new()).unwrap();

        assert!(store.get("alice").unwrap().is_empty());
    }

    #[test]
    fn test_preferences_are_per_user() {
        let store = SqlitePreferenceStore::in_memory().unwrap();

        store
            .save("alice", &PreferenceSet::from_tags(["action"]))
            .unwrap();

        assert!(store.get("bob").unwrap().is_empty());
    }
}
