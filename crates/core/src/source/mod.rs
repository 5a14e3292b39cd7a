//! External catalog sources - FreeToGame and GamerPower API clients.
//!
//! Both are unauthenticated public REST APIs returning JSON arrays. Their
//! exact schemas are integration details: raw response structs stay private
//! and convert into [`CatalogItem`] at the module boundary.

mod freetogame;
mod gamerpower;

pub use freetogame::{FreeToGameClient, FreeToGameConfig};
pub use gamerpower::{GamerPowerClient, GamerPowerConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogItem;

/// Errors that can occur when fetching from a catalog source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No backend configured for the requested operation.
    #[error("Source not configured: {0}")]
    NotConfigured(String),
}

/// Filter forwarded to the giveaway API as query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GiveawayFilter {
    /// Platform slug (e.g. "pc", "steam"). `None` means all.
    #[serde(default)]
    pub platform: Option<String>,
    /// Giveaway type (e.g. "game", "loot"). `None` means all.
    #[serde(default)]
    pub kind: Option<String>,
    /// Sort order (e.g. "date", "value", "popularity").
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// Trait for catalog source clients.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full free-to-play games list.
    async fn fetch_games(&self) -> Result<Vec<CatalogItem>, SourceError>;

    /// Fetch a single game by id.
    async fn fetch_game(&self, id: &str) -> Result<CatalogItem, SourceError>;

    /// Fetch current giveaways, optionally filtered upstream.
    async fn fetch_giveaways(
        &self,
        filter: &GiveawayFilter,
    ) -> Result<Vec<CatalogItem>, SourceError>;
}

/// Combined source client that delegates to the appropriate backend.
pub struct CombinedSourceClient {
    freetogame: Option<FreeToGameClient>,
    gamerpower: Option<GamerPowerClient>,
}

impl CombinedSourceClient {
    /// Create a new combined client with optional backends.
    pub fn new(freetogame: Option<FreeToGameClient>, gamerpower: Option<GamerPowerClient>) -> Self {
        Self {
            freetogame,
            gamerpower,
        }
    }

    pub fn has_games_backend(&self) -> bool {
        self.freetogame.is_some()
    }

    pub fn has_giveaways_backend(&self) -> bool {
        self.gamerpower.is_some()
    }
}

#[async_trait]
impl CatalogSource for CombinedSourceClient {
    async fn fetch_games(&self) -> Result<Vec<CatalogItem>, SourceError> {
        match &self.freetogame {
            Some(client) => client.fetch_games().await,
            None => Err(SourceError::NotConfigured(
                "FreeToGame client not configured".to_string(),
            )),
        }
    }

    async fn fetch_game(&self, id: &str) -> Result<CatalogItem, SourceError> {
        match &self.freetogame {
            Some(client) => client.fetch_game(id).await,
            None => Err(SourceError::NotConfigured(
                "FreeToGame client not configured".to_string(),
            )),
        }
    }

    async fn fetch_giveaways(
        &self,
        filter: &GiveawayFilter,
    ) -> Result<Vec<CatalogItem>, SourceError> {
        match &self.gamerpower {
            Some(client) => client.fetch_giveaways(filter).await,
            None => Err(SourceError::NotConfigured(
                "GamerPower client not configured".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_combined_client_without_backends() {
        let client = CombinedSourceClient::new(None, None);
        assert!(!client.has_games_backend());
        assert!(!client.has_giveaways_backend());

        let result = client.fetch_games().await;
        assert!(matches!(result, Err(SourceError::NotConfigured(_))));

        let result = client.fetch_giveaways(&GiveawayFilter::default()).await;
        assert!(matches!(result, Err(SourceError::NotConfigured(_))));
    }

    #[test]
    fn test_giveaway_filter_default_is_unfiltered() {
        let filter = GiveawayFilter::default();
        assert!(filter.platform.is_none());
        assert!(filter.kind.is_none());
        assert!(filter.sort_by.is_none());
    }
}
