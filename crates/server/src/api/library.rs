//! Library (claimed items) handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use freeshelf_core::{ClaimError, ClaimRequest, ClaimedItem};

use super::games::{store_error_response, ErrorResponse};
use super::middleware::AuthUser;
use crate::metrics::CLAIMS_TOTAL;
use crate::state::AppState;

/// Response for listing a user's library
#[derive(Debug, Serialize)]
pub struct ListLibraryResponse {
    pub items: Vec<ClaimedItem>,
    pub total: u64,
}

/// Response for a claim operation
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    /// True when the item was already in the library (claim is idempotent)
    pub already_claimed: bool,
}

/// List the caller's claimed items, newest first
pub async fn list_library(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ListLibraryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let items = state.claims().list(&user_id).map_err(store_error_response)?;
    let total = state.claims().count(&user_id).map_err(store_error_response)?;
    Ok(Json(ListLibraryResponse { items, total }))
}

/// Claim an item into the caller's library
pub async fn claim_item(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<ClaimRequest>,
) -> Result<Json<ClaimResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = body.id.clone();
    let inserted = state
        .claims()
        .claim(&user_id, &body)
        .map_err(store_error_response)?;

    CLAIMS_TOTAL
        .with_label_values(&[if inserted { "claimed" } else { "duplicate" }])
        .inc();

    Ok(Json(ClaimResponse {
        id,
        already_claimed: !inserted,
    }))
}

/// Remove a claim from the caller's library
pub async fn unclaim_item(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.claims().unclaim(&user_id, &id) {
        Ok(()) => {
            CLAIMS_TOTAL.with_label_values(&["unclaimed"]).inc();
            Ok(StatusCode::NO_CONTENT)
        }
        Err(ClaimError::NotFound(msg)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: msg,
                retryable: false,
            }),
        )),
        Err(e) => Err(store_error_response(e)),
    }
}
