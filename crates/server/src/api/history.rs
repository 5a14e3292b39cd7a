//! Search history handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::games::{store_error_response, ErrorResponse};
use super::middleware::AuthUser;
use crate::state::AppState;

/// Request body for recording a search term
#[derive(Debug, Deserialize)]
pub struct RecordSearchBody {
    pub term: String,
}

/// Response carrying a user's recent search terms, most recent first
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub terms: Vec<String>,
}

/// List the caller's recent search terms
pub async fn list_history(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let terms = state.history().list(&user_id).map_err(store_error_response)?;
    Ok(Json(HistoryResponse { terms }))
}

/// Record a search term. Blank terms are ignored; the response carries the
/// updated history.
pub async fn record_search(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<RecordSearchBody>,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .history()
        .record(&user_id, &body.term)
        .map_err(store_error_response)?;
    let terms = state.history().list(&user_id).map_err(store_error_response)?;
    Ok(Json(HistoryResponse { terms }))
}
