//! Snapshot cache for fetched catalog lists.
//!
//! A stored snapshot is overwritten wholesale on the next successful fetch;
//! there is no merging and no invalidation policy beyond overwrite. The
//! cache lets the server answer from the last known list while the source is
//! slow or down, the way the mobile client served its cached games list on
//! launch.

mod sqlite;

pub use sqlite::SqliteSnapshotCache;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogItem;

/// A cached catalog snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSnapshot {
    pub items: Vec<CatalogItem>,
    pub fetched_at: DateTime<Utc>,
}

/// Errors for snapshot cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Trait for snapshot cache backends.
pub trait SnapshotCache: Send + Sync {
    /// Store a snapshot under `key`, replacing any previous one.
    fn store(&self, key: &str, items: &[CatalogItem]) -> Result<(), CacheError>;

    /// Load the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<CachedSnapshot>, CacheError>;
}
