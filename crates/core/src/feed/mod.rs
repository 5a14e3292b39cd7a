//! Feed composition - randomized, preference-weighted ordering of a catalog
//! snapshot.
//!
//! The composer is a pure function of its inputs plus the entropy source: no
//! I/O, no shared state, total over any well-formed input. Re-invoking with
//! the same inputs yields a different permutation unless the rng is seeded,
//! so callers must memoize the output rather than recomputing per render.

mod composer;
mod types;

pub use composer::{compose, shuffle};
pub use types::PreferenceSet;
