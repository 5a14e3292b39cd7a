//! Per-user profile (display name).

mod sqlite;

pub use sqlite::SqliteProfileStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default display name for users who never set one.
pub const DEFAULT_DISPLAY_NAME: &str = "Gamer";

/// A user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
}

impl Profile {
    /// Profile for a user who has never saved one.
    pub fn default_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

/// Errors for profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid display name: {0}")]
    InvalidName(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Trait for profile storage backends.
pub trait ProfileStore: Send + Sync {
    /// Get a user's profile; users who never saved get the default.
    fn get(&self, user_id: &str) -> Result<Profile, ProfileError>;

    /// Update the display name. The name is trimmed; blank names are
    /// rejected with `InvalidName`.
    fn set_display_name(&self, user_id: &str, name: &str) -> Result<Profile, ProfileError>;
}
