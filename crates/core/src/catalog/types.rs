//! Types for catalog items.

use serde::{Deserialize, Serialize};

/// What kind of entry a catalog item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A free-to-play game.
    #[default]
    Game,
    /// A time-limited giveaway (game, loot, beta key).
    Giveaway,
}

/// One entry from a catalog source.
///
/// `id` is unique within a single fetched snapshot and compared by string
/// equality (numeric upstream ids are stringified). Everything besides `id`,
/// `title` and `genre` is opaque pass-through data for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Free-text category label; absent means "no category".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Item kind (game vs giveaway).
    #[serde(default)]
    pub kind: ItemKind,
    /// Thumbnail image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// One-line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Platform label (e.g. "PC (Windows)", "Steam, Epic Games Store").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Link to the game page or the giveaway claim page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Monetary worth of a giveaway (e.g. "$9.99").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worth: Option<String>,
    /// When a giveaway expires, as reported upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CatalogItem {
    /// Lower-cased genre, or `None` when the genre is absent or blank.
    ///
    /// Items with no usable genre never match a preference set.
    pub fn genre_lower(&self) -> Option<String> {
        self.genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_lowercase)
    }
}
