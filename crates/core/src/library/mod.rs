//! Per-user claimed-item library.
//!
//! A claim records that a user intends to redeem a giveaway or game. Claims
//! are keyed by `(user_id, item_id)` and claiming an already-claimed item is
//! a no-op, mirroring the idempotent write the mobile client performs.

mod sqlite;
mod types;

pub use sqlite::SqliteClaimStore;
pub use types::*;

use std::collections::HashSet;

/// Trait for claim storage backends.
pub trait ClaimStore: Send + Sync {
    /// Record a claim for a user.
    ///
    /// Returns `false` when the item was already claimed (no overwrite).
    fn claim(&self, user_id: &str, request: &ClaimRequest) -> Result<bool, ClaimError>;

    /// Remove a claim. `NotFound` when the user never claimed the item.
    fn unclaim(&self, user_id: &str, item_id: &str) -> Result<(), ClaimError>;

    /// List a user's claims, newest first.
    fn list(&self, user_id: &str) -> Result<Vec<ClaimedItem>, ClaimError>;

    /// The set of item ids a user has claimed.
    fn claimed_ids(&self, user_id: &str) -> Result<HashSet<String>, ClaimError>;

    /// Number of claims a user holds.
    fn count(&self, user_id: &str) -> Result<u64, ClaimError>;
}
