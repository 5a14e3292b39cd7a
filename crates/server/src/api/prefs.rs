//! Genre preference handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use freeshelf_core::PreferenceSet;

use super::games::{store_error_response, ErrorResponse};
use super::middleware::AuthUser;
use crate::state::AppState;

/// Request body for saving preferences
#[derive(Debug, Deserialize)]
pub struct PutPreferencesBody {
    pub categories: Vec<String>,
}

/// Response carrying a user's normalized preference tags
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub categories: PreferenceSet,
}

/// Get the caller's saved genre preferences
pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PreferencesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let categories = state.prefs().get(&user_id).map_err(store_error_response)?;
    Ok(Json(PreferencesResponse { categories }))
}

/// Replace the caller's genre preferences. Tags are trimmed, lower-cased and
/// de-duplicated before saving.
pub async fn put_preferences(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PutPreferencesBody>,
) -> Result<Json<PreferencesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let categories = PreferenceSet::from_tags(body.categories);
    state
        .prefs()
        .save(&user_id, &categories)
        .map_err(store_error_response)?;
    Ok(Json(PreferencesResponse { categories }))
}
