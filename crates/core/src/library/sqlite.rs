//! SQLite-backed claim store implementation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{ClaimError, ClaimRequest, ClaimStore, ClaimedItem};

/// SQLite-backed claim store.
pub struct SqliteClaimStore {
    conn: Mutex<Connection>,
}

impl SqliteClaimStore {
    /// Create a new SQLite claim store, creating the database file and tables
    /// if needed.
    pub fn new(path: &Path) -> Result<Self, ClaimError> {
        let conn = Connection::open(path).map_err(|e| ClaimError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite claim store (useful for testing).
    pub fn in_memory() -> Result<Self, ClaimError> {
        let conn = Connection::open_in_memory().map_err(|e| ClaimError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), ClaimError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS claims (
                user_id TEXT NOT NULL,
                item_id TEXT NOT NULL,
                title TEXT NOT NULL,
                genre TEXT,
                thumbnail TEXT,
                description TEXT,
                platform TEXT,
                url TEXT,
                claimed_at TEXT NOT NULL,
                PRIMARY KEY (user_id, item_id)
            );

            CREATE INDEX IF NOT EXISTS idx_claims_user ON claims(user_id, claimed_at DESC);
            "#,
        )
        .map_err(|e| ClaimError::Database(e.to_string()))?;

        Ok(())
    }

    fn row_to_claimed_item(row: &rusqlite::Row) -> rusqlite::Result<ClaimedItem> {
        let claimed_at_str: String = row.get(7)?;
        let claimed_at = DateTime::parse_from_rfc3339(&claimed_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(ClaimedItem {
            id: row.get(0)?,
            title: row.get(1)?,
            genre: row.get(2)?,
            thumbnail: row.get(3)?,
            description: row.get(4)?,
            platform: row.get(5)?,
            url: row.get(6)?,
            claimed_at,
        })
    }
}

impl ClaimStore for SqliteClaimStore {
    fn claim(&self, user_id: &str, request: &ClaimRequest) -> Result<bool, ClaimError> {
        let conn = self.conn.lock().unwrap();

        let inserted = conn
            .execute(
                r#"
                INSERT OR IGNORE INTO claims
                    (user_id, item_id, title, genre, thumbnail, description, platform, url, claimed_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    user_id,
                    request.id,
                    request.title,
                    request.genre,
                    request.thumbnail,
                    request.description,
                    request.platform,
                    request.url,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        Ok(inserted > 0)
    }

    fn unclaim(&self, user_id: &str, item_id: &str) -> Result<(), ClaimError> {
        let conn = self.conn.lock().unwrap();

        let deleted = conn
            .execute(
                "DELETE FROM claims WHERE user_id = ?1 AND item_id = ?2",
                params![user_id, item_id],
            )
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        if deleted == 0 {
            return Err(ClaimError::NotFound(item_id.to_string()));
        }

        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<ClaimedItem>, ClaimError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                r#"
                SELECT item_id, title, genre, thumbnail, description, platform, url, claimed_at
                FROM claims WHERE user_id = ?1
                ORDER BY claimed_at DESC, item_id DESC
                "#,
            )
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], Self::row_to_claimed_item)
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row.map_err(|e| ClaimError::Database(e.to_string()))?);
        }
        Ok(items)
    }

    fn claimed_ids(&self, user_id: &str) -> Result<HashSet<String>, ClaimError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare("SELECT item_id FROM claims WHERE user_id = ?1")
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], |row| row.get::<_, String>(0))
            .map_err(|e| ClaimError::Database(e.to_string()))?;

        let mut ids = HashSet::new();
        for row in rows {
            ids.insert(row.map_err(|e| ClaimError::Database(e.to_string()))?);
        }
        Ok(ids)
    }

    fn count(&self, user_id: &str) -> Result<u64, ClaimError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row(
            "SELECT COUNT(*) FROM claims WHERE user_id = ?1",
            params![user_id],
            |row| row.get::<_, u64>(0),
        )
        .map_err(|e| ClaimError::Database(e.to_string()))
    }
}
