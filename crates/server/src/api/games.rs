//! Games catalog and personalized feed handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use freeshelf_core::{
    compose, filter_by_genre, filter_by_title, CatalogItem, SourceError,
};

use super::middleware::AuthUser;
use crate::metrics::{CACHE_SERVED_TOTAL, FEEDS_COMPOSED_TOTAL, SOURCE_FETCHES_TOTAL};
use crate::state::AppState;

/// Snapshot cache key for the games list.
const GAMES_CACHE_KEY: &str = "games";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing games
#[derive(Debug, Deserialize)]
pub struct ListGamesParams {
    /// Case-insensitive title substring filter
    pub search: Option<String>,
    /// Case-insensitive exact genre filter
    pub genre: Option<String>,
    /// Bypass the snapshot cache and refetch upstream
    #[serde(default)]
    pub refresh: bool,
}

/// Response for listing games
#[derive(Debug, Serialize)]
pub struct ListGamesResponse {
    pub games: Vec<CatalogItem>,
    pub total: usize,
}

/// Response for the personalized feed
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub items: Vec<CatalogItem>,
    /// Whether the caller had saved preferences that biased the ordering
    pub matched_preferences: bool,
}

/// Error response for source and store failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub retryable: bool,
}

pub(super) fn source_error_response(err: SourceError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        SourceError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: msg,
                retryable: false,
            }),
        ),
        SourceError::NotConfigured(msg) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: msg,
                retryable: false,
            }),
        ),
        other => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: other.to_string(),
                retryable: true,
            }),
        ),
    }
}

pub(super) fn store_error_response(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
            retryable: false,
        }),
    )
}

// ============================================================================
// Snapshot policy
// ============================================================================

/// Load the games list, serving the cached snapshot unless `refresh` is set
/// or the cache is empty. Successful fetches overwrite the snapshot; a
/// failed fetch falls back to the snapshot when one exists.
pub(super) async fn load_games(
    state: &AppState,
    refresh: bool,
) -> Result<Vec<CatalogItem>, (StatusCode, Json<ErrorResponse>)> {
    if !refresh {
        match state.cache().load(GAMES_CACHE_KEY) {
            Ok(Some(snapshot)) => {
                CACHE_SERVED_TOTAL.with_label_values(&[GAMES_CACHE_KEY]).inc();
                return Ok(snapshot.items);
            }
            Ok(None) => {}
            Err(e) => warn!("Snapshot cache read failed: {}", e),
        }
    }

    match state.source().fetch_games().await {
        Ok(games) => {
            SOURCE_FETCHES_TOTAL
                .with_label_values(&["freetogame", "ok"])
                .inc();
            if let Err(e) = state.cache().store(GAMES_CACHE_KEY, &games) {
                warn!("Snapshot cache write failed: {}", e);
            }
            Ok(games)
        }
        Err(err) => {
            SOURCE_FETCHES_TOTAL
                .with_label_values(&["freetogame", "error"])
                .inc();
            // Serve the stale snapshot rather than failing outright.
            if let Ok(Some(snapshot)) = state.cache().load(GAMES_CACHE_KEY) {
                warn!("Upstream fetch failed, serving cached snapshot: {}", err);
                CACHE_SERVED_TOTAL.with_label_values(&[GAMES_CACHE_KEY]).inc();
                return Ok(snapshot.items);
            }
            Err(source_error_response(err))
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// List free-to-play games, optionally filtered by title and genre
pub async fn list_games(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListGamesParams>,
) -> Result<Json<ListGamesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut games = load_games(&state, params.refresh).await?;

    if let Some(search) = &params.search {
        games = filter_by_title(games, search);
    }
    if let Some(genre) = &params.genre {
        games = filter_by_genre(games, genre);
    }

    let total = games.len();
    Ok(Json(ListGamesResponse { games, total }))
}

/// Get a single game by id
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, (StatusCode, Json<ErrorResponse>)> {
    match state.source().fetch_game(&id).await {
        Ok(game) => {
            SOURCE_FETCHES_TOTAL
                .with_label_values(&["freetogame", "ok"])
                .inc();
            Ok(Json(game))
        }
        Err(err) => {
            if !matches!(err, SourceError::NotFound(_)) {
                SOURCE_FETCHES_TOTAL
                    .with_label_values(&["freetogame", "error"])
                    .inc();
            }
            Err(source_error_response(err))
        }
    }
}

/// Query parameters for the personalized feed
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Bypass the snapshot cache and refetch upstream
    #[serde(default)]
    pub refresh: bool,
}

/// The preference-weighted feed: games reordered by the composer using the
/// caller's saved genre preferences
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let games = load_games(&state, params.refresh).await?;

    let preferred = state.prefs().get(&user_id).map_err(store_error_response)?;
    let matched_preferences = !preferred.is_empty();

    let mut rng = rand::rng();
    let items = compose(games, &preferred, &mut rng);
    FEEDS_COMPOSED_TOTAL.inc();

    Ok(Json(FeedResponse {
        items,
        matched_preferences,
    }))
}
