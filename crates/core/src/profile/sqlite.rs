//! SQLite-backed profile store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{Profile, ProfileError, ProfileStore};

/// SQLite-backed profile store.
pub struct SqliteProfileStore {
    conn: Mutex<Connection>,
}

impl SqliteProfileStore {
    /// Create a new SQLite profile store, creating the database file and
    /// tables if needed.
    pub fn new(path: &Path) -> Result<Self, ProfileError> {
        let conn = Connection::open(path).map_err(|e| ProfileError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite profile store (useful for testing).
    pub fn in_memory() -> Result<Self, ProfileError> {
        let conn =
            Connection::open_in_memory().map_err(|e| ProfileError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), ProfileError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY,
                display_name TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| ProfileError::Database(e.to_string()))?;

        Ok(())
    }
}

impl ProfileStore for SqliteProfileStore {
    fn get(&self, user_id: &str) -> Result<Profile, ProfileError> {
        let conn = self.conn.lock().unwrap();

        let display_name: Option<String> = conn
            .query_row(
                "SELECT display_name FROM profiles WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ProfileError::Database(e.to_string()))?;

        Ok(match display_name {
            Some(display_name) => Profile {
                user_id: user_id.to_string(),
                display_name,
            },
            None => Profile::default_for(user_id),
        })
    }

    fn set_display_name(&self, user_id: &str, name: &str) -> Result<Profile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::InvalidName(
                "display name cannot be blank".to_string(),
            ));
        }

        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"
            INSERT INTO profiles (user_id, display_name, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
                display_name = excluded.display_name,
                updated_at = excluded.updated_at
            "#,
            params![user_id, name, Utc::now().to_rfc3339()],
        )
        .map_err(|e| ProfileError::Database(e.to_string()))?;

        Ok(Profile {
            user_id: user_id.to_string(),
            display_name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DEFAULT_DISPLAY_NAME;

    #[test]
    fn test_unset_profile_gets_default_name() {
        let store = SqliteProfileStore::in_memory().unwrap();
        let profile = store.get("alice").unwrap();
        assert_eq!(profile.display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(profile.user_id, "alice");
    }

    #[test]
    fn test_set_and_get_display_name() {
        let store = SqliteProfileStore::in_memory().unwrap();

        let updated = store.set_display_name("alice", "  Alice W  ").unwrap();
        assert_eq!(updated.display_name, "Alice W");

        let loaded = store.get("alice").unwrap();
        assert_eq!(loaded.display_name, "Alice W");
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = SqliteProfileStore::in_memory().unwrap();
        let result = store.set_display_name("alice", "   ");
        assert!(matches!(result, Err(ProfileError::InvalidName(_))));
    }

    #[test]
    fn test_profiles_are_per_user() {
        let store = SqliteProfileStore::in_memory().unwrap();

        store.set_display_name("alice", "Alice").unwrap();

        assert_eq!(store.get("bob").unwrap().display_name, DEFAULT_DISPLAY_NAME);
    }
}
