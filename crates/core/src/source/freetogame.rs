//! FreeToGame API client.
//!
//! Public API, no key required. Returns the full free-to-play catalog as a
//! single JSON array.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogItem, ItemKind};

use super::SourceError;

/// FreeToGame API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeToGameConfig {
    /// Base URL (default: https://www.freetogame.com/api).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for FreeToGameConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u32 {
    30
}

/// FreeToGame API client.
pub struct FreeToGameClient {
    client: Client,
    base_url: String,
}

impl FreeToGameClient {
    /// Create a new FreeToGame client.
    pub fn new(config: FreeToGameConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://www.freetogame.com/api".to_string());

        Ok(Self { client, base_url })
    }

    /// Fetch the full games list.
    pub async fn fetch_games(&self) -> Result<Vec<CatalogItem>, SourceError> {
        let url = format!("{}/games", self.base_url.trim_end_matches('/'));

        debug!("FreeToGame games fetch");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let games: Vec<FreeToGameResult> = response.json().await.map_err(|e| {
            SourceError::Parse(format!("Failed to parse games response: {}", e))
        })?;

        debug!(count = games.len(), "FreeToGame games fetch complete");

        Ok(games.into_iter().map(|g| g.into()).collect())
    }

    /// Fetch a single game by id.
    pub async fn fetch_game(&self, id: &str) -> Result<CatalogItem, SourceError> {
        let url = format!("{}/game", self.base_url.trim_end_matches('/'));

        debug!(id = id, "FreeToGame game fetch");

        let response = self.client.get(&url).query(&[("id", id)]).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(SourceError::NotFound(format!("Game id {}", id)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let game: FreeToGameResult = response.json().await.map_err(|e| {
            SourceError::Parse(format!("Failed to parse game response: {}", e))
        })?;

        // The API answers bad ids with a 200 status and an error object;
        // serde maps that to a missing id, which we treat as not found.
        if game.id == 0 {
            return Err(SourceError::NotFound(format!("Game id {}", id)));
        }

        Ok(game.into())
    }
}

// ============================================================================
// FreeToGame API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct FreeToGameResult {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    title: String,
    thumbnail: Option<String>,
    short_description: Option<String>,
    game_url: Option<String>,
    // Non-string genres are shaped into "no genre" rather than rejected.
    #[serde(default, deserialize_with = "lenient_string")]
    genre: Option<String>,
    platform: Option<String>,
}

/// Deserialize a field as `Some(String)` only when it is a JSON string;
/// any other shape (null, number, object) becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

impl From<FreeToGameResult> for CatalogItem {
    fn from(r: FreeToGameResult) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            genre: r.genre.filter(|g| !g.trim().is_empty()),
            kind: ItemKind::Game,
            thumbnail: r.thumbnail,
            short_description: r.short_description,
            platform: r.platform,
            url: r.game_url,
            worth: None,
            end_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_conversion() {
        let raw = r#"{
            "id": 452,
            "title": "Call of War",
            "thumbnail": "https://www.freetogame.com/g/452/thumbnail.jpg",
            "short_description": "A WW2 strategy game.",
            "game_url": "https://www.freetogame.com/open/call-of-war",
            "genre": "Strategy",
            "platform": "PC (Windows), Web Browser"
        }"#;
        let result: FreeToGameResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();

        assert_eq!(item.id, "452");
        assert_eq!(item.title, "Call of War");
        assert_eq!(item.genre.as_deref(), Some("Strategy"));
        assert_eq!(item.kind, ItemKind::Game);
        assert!(item.url.as_deref().unwrap().contains("call-of-war"));
    }

    #[test]
    fn test_non_string_genre_becomes_none() {
        let raw = r#"{"id": 1, "title": "Weird", "genre": 42}"#;
        let result: FreeToGameResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();
        assert_eq!(item.genre, None);
    }

    #[test]
    fn test_null_genre_becomes_none() {
        let raw = r#"{"id": 1, "title": "Weird", "genre": null}"#;
        let result: FreeToGameResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();
        assert_eq!(item.genre, None);
    }

    #[test]
    fn test_empty_genre_becomes_none() {
        let raw = r#"{"id": 1, "title": "Blank", "genre": "  "}"#;
        let result: FreeToGameResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();
        assert_eq!(item.genre, None);
    }

    #[test]
    fn test_error_object_maps_to_zero_id() {
        // The API returns {"status": 0, "status_message": "..."} for bad ids.
        let raw = r#"{"status": 0, "status_message": "No game found with that id"}"#;
        let result: FreeToGameResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.id, 0);
    }

    #[test]
    fn test_default_config() {
        let config = FreeToGameConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.base_url.is_none());
        let client = FreeToGameClient::new(config).unwrap();
        assert_eq!(client.base_url, "https://www.freetogame.com/api");
    }
}
