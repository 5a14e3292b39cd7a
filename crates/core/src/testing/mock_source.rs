//! Mock catalog source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::CatalogItem;
use crate::source::{CatalogSource, GiveawayFilter, SourceError};

/// Mock implementation of the [`CatalogSource`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable games and giveaways
/// - Track the giveaway filters requests were made with
/// - Simulate upstream failures
pub struct MockCatalogSource {
    games: Arc<RwLock<Vec<CatalogItem>>>,
    giveaways: Arc<RwLock<Vec<CatalogItem>>>,
    /// Recorded giveaway filters, one per fetch_giveaways call.
    giveaway_requests: Arc<RwLock<Vec<GiveawayFilter>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<SourceError>>>,
}

impl std::fmt::Debug for MockCatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCatalogSource")
            .field("games", &"<games>")
            .field("giveaways", &"<giveaways>")
            .finish()
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogSource {
    /// Create a new mock source with no items.
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(Vec::new())),
            giveaways: Arc::new(RwLock::new(Vec::new())),
            giveaway_requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the games returned by subsequent fetches.
    pub async fn set_games(&self, games: Vec<CatalogItem>) {
        *self.games.write().await = games;
    }

    /// Set the giveaways returned by subsequent fetches.
    pub async fn set_giveaways(&self, giveaways: Vec<CatalogItem>) {
        *self.giveaways.write().await = giveaways;
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: SourceError) {
        *self.next_error.write().await = Some(error);
    }

    /// The filters passed to fetch_giveaways, in call order.
    pub async fn recorded_giveaway_requests(&self) -> Vec<GiveawayFilter> {
        self.giveaway_requests.read().await.clone()
    }

    async fn take_error(&self) -> Option<SourceError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_games(&self) -> Result<Vec<CatalogItem>, SourceError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(self.games.read().await.clone())
    }

    async fn fetch_game(&self, id: &str) -> Result<CatalogItem, SourceError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.games
            .read()
            .await
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("game {id} not found")))
    }

    async fn fetch_giveaways(
        &self,
        filter: &GiveawayFilter,
    ) -> Result<Vec<CatalogItem>, SourceError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.giveaway_requests.write().await.push(filter.clone());
        Ok(self.giveaways.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_fetch_games_returns_configured_items() {
        let source = MockCatalogSource::new();
        source
            .set_games(vec![
                fixtures::game("1", "Warframe", "Shooter"),
                fixtures::game("2", "Dota 2", "MOBA"),
            ])
            .await;

        let games = source.fetch_games().await.unwrap();
        assert_eq!(games.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_game_by_id() {
        let source = MockCatalogSource::new();
        source
            .set_games(vec![fixtures::game("42", "Warframe", "Shooter")])
            .await;

        let game = source.fetch_game("42").await.unwrap();
        assert_eq!(game.title, "Warframe");

        let missing = source.fetch_game("999").await;
        assert!(matches!(missing, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_giveaway_requests_are_recorded() {
        let source = MockCatalogSource::new();

        let filter = GiveawayFilter {
            platform: Some("pc".to_string()),
            kind: None,
            sort_by: Some("value".to_string()),
        };
        source.fetch_giveaways(&filter).await.unwrap();

        let recorded = source.recorded_giveaway_requests().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].platform.as_deref(), Some("pc"));
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let source = MockCatalogSource::new();
        source
            .set_next_error(SourceError::ApiError {
                status: 500,
                message: "boom".to_string(),
            })
            .await;

        assert!(source.fetch_games().await.is_err());
        assert!(source.fetch_games().await.is_ok());
    }
}
