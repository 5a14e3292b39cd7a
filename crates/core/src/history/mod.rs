//! Per-user search history.
//!
//! Keeps the five most recent search terms per user, lower-cased and
//! de-duplicated, most recent first.

mod sqlite;

pub use sqlite::SqliteSearchHistoryStore;

use thiserror::Error;

/// Maximum number of remembered search terms per user.
pub const HISTORY_LIMIT: usize = 5;

/// Errors for search history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Trait for search history storage backends.
pub trait SearchHistoryStore: Send + Sync {
    /// Record a search term. Terms are trimmed and lower-cased; blank terms
    /// are ignored; a repeated term moves to the front; only the most recent
    /// [`HISTORY_LIMIT`] terms are kept.
    fn record(&self, user_id: &str, term: &str) -> Result<(), HistoryError>;

    /// A user's remembered terms, most recent first.
    fn list(&self, user_id: &str) -> Result<Vec<String>, HistoryError>;
}
