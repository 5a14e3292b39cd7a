//! User profile handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use freeshelf_core::{Profile, ProfileError};

use super::games::{store_error_response, ErrorResponse};
use super::middleware::AuthUser;
use crate::state::AppState;

/// Request body for updating the profile
#[derive(Debug, Deserialize)]
pub struct PutProfileBody {
    pub display_name: String,
}

/// Profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub display_name: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            display_name: profile.display_name,
        }
    }
}

/// Get the caller's profile (default display name when unset)
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    let profile = state
        .profiles()
        .get(&user_id)
        .map_err(store_error_response)?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Update the caller's display name. Blank names are rejected.
pub async fn put_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PutProfileBody>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.profiles().set_display_name(&user_id, &body.display_name) {
        Ok(profile) => Ok(Json(ProfileResponse::from(profile))),
        Err(ProfileError::InvalidName(msg)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: msg,
                retryable: false,
            }),
        )),
        Err(e) => Err(store_error_response(e)),
    }
}
