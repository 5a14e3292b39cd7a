//! Per-user genre preference storage.
//!
//! Preferences are read before composing a feed and written when the user
//! saves the preference screen. The composer never mutates them.

mod sqlite;

pub use sqlite::SqlitePreferenceStore;

use thiserror::Error;

use crate::feed::PreferenceSet;

/// Errors for preference operations.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Trait for preference storage backends.
pub trait PreferenceStore: Send + Sync {
    /// Get a user's preference set. Users who never saved get an empty set.
    fn get(&self, user_id: &str) -> Result<PreferenceSet, PreferenceError>;

    /// Overwrite a user's preference set.
    fn save(&self, user_id: &str, preferences: &PreferenceSet) -> Result<(), PreferenceError>;
}
