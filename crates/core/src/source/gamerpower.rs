//! GamerPower API client.
//!
//! Public API, no key required. Filters are forwarded upstream as query
//! parameters; the API answers 404 with a JSON error body when no giveaways
//! match, which is treated as an empty list.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogItem, ItemKind};

use super::{GiveawayFilter, SourceError};

/// GamerPower API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamerPowerConfig {
    /// Base URL (default: https://www.gamerpower.com/api).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for GamerPowerConfig {
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

/// GamerPower API client.
pub struct GamerPowerClient {
    client: Client,
    base_url: String,
}

impl GamerPowerClient {
    /// Create a new GamerPower client.
    pub fn new(config: GamerPowerConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://www.gamerpower.com/api".to_string());

        Ok(Self { client, base_url })
    }

    /// Build the giveaways URL for a filter.
    fn build_giveaways_url(&self, filter: &GiveawayFilter) -> String {
        let mut url = format!("{}/giveaways", self.base_url.trim_end_matches('/'));

        let mut params = Vec::new();
        if let Some(platform) = &filter.platform {
            params.push(format!("platform={}", urlencoding::encode(platform)));
        }
        if let Some(kind) = &filter.kind {
            params.push(format!("type={}", urlencoding::encode(kind)));
        }
        if let Some(sort_by) = &filter.sort_by {
            params.push(format!("sort-by={}", urlencoding::encode(sort_by)));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        url
    }

    /// Fetch current giveaways.
    pub async fn fetch_giveaways(
        &self,
        filter: &GiveawayFilter,
    ) -> Result<Vec<CatalogItem>, SourceError> {
        let url = self.build_giveaways_url(filter);

        debug!(url = %url, "GamerPower giveaways fetch");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            // No active giveaways for this filter combination.
            return Ok(vec![]);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let giveaways: Vec<GamerPowerResult> = response.json().await.map_err(|e| {
            SourceError::Parse(format!("Failed to parse giveaways response: {}", e))
        })?;

        debug!(count = giveaways.len(), "GamerPower giveaways fetch complete");

        Ok(giveaways.into_iter().map(|g| g.into()).collect())
    }
}

// ============================================================================
// GamerPower API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct GamerPowerResult {
    id: u64,
    #[serde(default)]
    title: String,
    worth: Option<String>,
    thumbnail: Option<String>,
    description: Option<String>,
    open_giveaway_url: Option<String>,
    /// Giveaway type ("Game", "DLC", "Early Access") doubles as the
    /// category label.
    #[serde(rename = "type")]
    giveaway_type: Option<String>,
    platforms: Option<String>,
    end_date: Option<String>,
}

impl From<GamerPowerResult> for CatalogItem {
    fn from(r: GamerPowerResult) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            genre: r.giveaway_type.filter(|t| !t.trim().is_empty()),
            kind: ItemKind::Giveaway,
            thumbnail: r.thumbnail,
            short_description: r.description,
            platform: r.platforms,
            url: r.open_giveaway_url,
            worth: r.worth.filter(|w| w != "N/A"),
            end_date: r.end_date.filter(|d| d != "N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GamerPowerClient {
        GamerPowerClient::new(GamerPowerConfig::default()).unwrap()
    }

    #[test]
    fn test_build_url_no_filter() {
        let url = test_client().build_giveaways_url(&GiveawayFilter::default());
        assert_eq!(url, "https://www.gamerpower.com/api/giveaways");
    }

    #[test]
    fn test_build_url_all_filters() {
        let filter = GiveawayFilter {
            platform: Some("steam".to_string()),
            kind: Some("game".to_string()),
            sort_by: Some("date".to_string()),
        };
        let url = test_client().build_giveaways_url(&filter);
        assert_eq!(
            url,
            "https://www.gamerpower.com/api/giveaways?platform=steam&type=game&sort-by=date"
        );
    }

    #[test]
    fn test_build_url_encodes_values() {
        let filter = GiveawayFilter {
            platform: Some("epic games".to_string()),
            kind: None,
            sort_by: None,
        };
        let url = test_client().build_giveaways_url(&filter);
        assert!(url.ends_with("?platform=epic%20games"));
    }

    #[test]
    fn test_result_conversion() {
        let raw = r#"{
            "id": 2301,
            "title": "Deus Ex Giveaway",
            "worth": "$9.99",
            "thumbnail": "https://www.gamerpower.com/offers/1/thumb.jpg",
            "description": "Grab it while it lasts.",
            "open_giveaway_url": "https://www.gamerpower.com/open/deus-ex",
            "type": "Game",
            "platforms": "PC, Steam",
            "end_date": "2026-09-01 23:59:00"
        }"#;
        let result: GamerPowerResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();

        assert_eq!(item.id, "2301");
        assert_eq!(item.kind, ItemKind::Giveaway);
        assert_eq!(item.genre.as_deref(), Some("Game"));
        assert_eq!(item.worth.as_deref(), Some("$9.99"));
        assert_eq!(item.platform.as_deref(), Some("PC, Steam"));
    }

    #[test]
    fn test_na_fields_become_none() {
        let raw = r#"{"id": 1, "title": "Loot Drop", "worth": "N/A", "end_date": "N/A"}"#;
        let result: GamerPowerResult = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = result.into();
        assert_eq!(item.worth, None);
        assert_eq!(item.end_date, None);
    }
}
