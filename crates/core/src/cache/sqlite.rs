//! SQLite-backed snapshot cache implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{CacheError, CachedSnapshot, SnapshotCache};
use crate::catalog::CatalogItem;

/// SQLite-backed snapshot cache. One row per key, items serialized as JSON.
pub struct SqliteSnapshotCache {
    conn: Mutex<Connection>,
}

impl SqliteSnapshotCache {
    /// Create a new SQLite snapshot cache, creating the database file and
    /// tables if needed.
    pub fn new(path: &Path) -> Result<Self, CacheError> {
        let conn = Connection::open(path).map_err(|e| CacheError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite snapshot cache (useful for testing).
    pub fn in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory().map_err(|e| CacheError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CacheError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                items TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| CacheError::Database(e.to_string()))?;

        Ok(())
    }
}

impl SnapshotCache for SqliteSnapshotCache {
    fn store(&self, key: &str, items: &[CatalogItem]) -> Result<(), CacheError> {
        let conn = self.conn.lock().unwrap();

        let items_json =
            serde_json::to_string(items).map_err(|e| CacheError::Database(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO snapshots (key, items, fetched_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                items = excluded.items,
                fetched_at = excluded.fetched_at
            "#,
            params![key, items_json, Utc::now().to_rfc3339()],
        )
        .map_err(|e| CacheError::Database(e.to_string()))?;

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CachedSnapshot>, CacheError> {
        let conn = self.conn.lock().unwrap();

        let row: Option<(String, String)> = conn
            .query_row(
                "SELECT items, fetched_at FROM snapshots WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| CacheError::Database(e.to_string()))?;

        match row {
            Some((items_json, fetched_at_str)) => {
                let items: Vec<CatalogItem> = serde_json::from_str(&items_json)
                    .map_err(|e| CacheError::Database(e.to_string()))?;
                let fetched_at = DateTime::parse_from_rfc3339(&fetched_at_str)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now());
                Ok(Some(CachedSnapshot { items, fetched_at }))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: format!("Game {}", id),
            genre: Some("Action".to_string()),
            kind: ItemKind::Game,
            thumbnail: None,
            short_description: None,
            platform: None,
            url: None,
            worth: None,
            end_date: None,
        }
    }

    #[test]
    fn test_load_missing_key() {
        let cache = SqliteSnapshotCache::in_memory().unwrap();
        assert!(cache.load("games").unwrap().is_none());
    }

    #[test]
    fn test_store_and_load() {
        let cache = SqliteSnapshotCache::in_memory().unwrap();

        cache.store("games", &[item("1"), item("2")]).unwrap();

        let snapshot = cache.load("games").unwrap().unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].id, "1");
    }

    #[test]
    fn test_store_overwrites_wholesale() {
        let cache = SqliteSnapshotCache::in_memory().unwrap();

        cache.store("games", &[item("1"), item("2")]).unwrap();
        cache.store("games", &[item("3")]).unwrap();

        let snapshot = cache.load("games").unwrap().unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, "3");
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = SqliteSnapshotCache::in_memory().unwrap();

        cache.store("games", &[item("1")]).unwrap();

        assert!(cache.load("giveaways").unwrap().is_none());
    }

    #[test]
    fn test_store_empty_snapshot() {
        let cache = SqliteSnapshotCache::in_memory().unwrap();
        cache.store("games", &[]).unwrap();
        let snapshot = cache.load("games").unwrap().unwrap();
        assert!(snapshot.items.is_empty());
    }
}
