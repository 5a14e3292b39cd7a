//! Types for the claimed-item library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogItem;

/// A claim stored in a user's library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimedItem {
    /// Catalog item id the claim refers to.
    pub id: String,
    /// Display name at claim time.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// When the claim was recorded.
    pub claimed_at: DateTime<Utc>,
}

/// Request to record a claim. The claim timestamp is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<&CatalogItem> for ClaimRequest {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            genre: item.genre.clone(),
            thumbnail: item.thumbnail.clone(),
            description: item.short_description.clone(),
            platform: item.platform.clone(),
            url: item.url.clone(),
        }
    }
}

/// Errors for claim operations.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}
