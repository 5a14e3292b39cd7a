//! Catalog data model - items fetched from the external game/giveaway APIs.
//!
//! A catalog snapshot is ephemeral: fetched fresh per request, never merged
//! across fetches. The only persistence is the snapshot cache, which
//! overwrites wholesale.

mod filter;
mod types;

pub use filter::*;
pub use types::*;
