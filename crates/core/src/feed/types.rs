//! Preference set type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// User-selected genre tags used to bias feed composition.
///
/// Tags are normalized on construction: trimmed, lower-cased, blanks
/// dropped, duplicates collapsed. An empty set means "no personalization".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceSet(BTreeSet<String>);

impl PreferenceSet {
    /// Empty preference set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a normalized set from raw tags.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tags.into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Membership test; `genre` is compared case-insensitively.
    pub fn contains(&self, genre: &str) -> bool {
        self.0.contains(&genre.trim().to_lowercase())
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
