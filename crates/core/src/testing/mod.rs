//! Testing utilities and mock implementations for E2E tests.
//!
//! Provides a mock catalog source so server tests can run without reaching
//! the real upstream APIs.

mod mock_source;

pub use mock_source::MockCatalogSource;

pub mod fixtures {
    use crate::catalog::{CatalogItem, ItemKind};

    /// A free game entry with the given id, title and genre.
    pub fn game(id: &str, title: &str, genre: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            genre: Some(genre.to_string()),
            kind: ItemKind::Game,
            thumbnail: Some(format!("https://cdn.example.com/{id}.jpg")),
            short_description: Some(format!("{title} is a free-to-play game.")),
            platform: Some("PC (Windows)".to_string()),
            url: Some(format!("https://games.example.com/{id}")),
            worth: None,
            end_date: None,
        }
    }

    /// A giveaway entry with the given id, title and category.
    pub fn giveaway(id: &str, title: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            genre: Some(category.to_string()),
            kind: ItemKind::Giveaway,
            thumbnail: Some(format!("https://cdn.example.com/{id}.jpg")),
            short_description: Some(format!("Claim {title} for free.")),
            platform: Some("PC".to_string()),
            url: Some(format!("https://loot.example.com/{id}")),
            worth: Some("$9.99".to_string()),
            end_date: Some("2026-12-31 23:59:59".to_string()),
        }
    }
}
