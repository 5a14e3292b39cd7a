//! Giveaway handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use freeshelf_core::{filter_by_title, CatalogItem, GiveawayFilter};

use super::games::{source_error_response, ErrorResponse};
use crate::metrics::SOURCE_FETCHES_TOTAL;
use crate::state::AppState;

/// Query parameters for listing giveaways. Platform, type and sort order are
/// forwarded upstream; search is applied locally.
#[derive(Debug, Deserialize)]
pub struct ListGiveawaysParams {
    pub platform: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "sort-by")]
    pub sort_by: Option<String>,
    pub search: Option<String>,
}

/// Response for listing giveaways
#[derive(Debug, Serialize)]
pub struct ListGiveawaysResponse {
    pub giveaways: Vec<CatalogItem>,
    pub total: usize,
}

/// List current giveaways
pub async fn list_giveaways(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListGiveawaysParams>,
) -> Result<Json<ListGiveawaysResponse>, (StatusCode, Json<ErrorResponse>)> {
    let filter = GiveawayFilter {
        platform: params.platform,
        kind: params.kind,
        sort_by: params.sort_by,
    };

    let mut giveaways = match state.source().fetch_giveaways(&filter).await {
        Ok(giveaways) => {
            SOURCE_FETCHES_TOTAL
                .with_label_values(&["gamerpower", "ok"])
                .inc();
            giveaways
        }
        Err(err) => {
            SOURCE_FETCHES_TOTAL
                .with_label_values(&["gamerpower", "error"])
                .inc();
            return Err(source_error_response(err));
        }
    };

    if let Some(search) = &params.search {
        giveaways = filter_by_title(giveaways, search);
    }

    let total = giveaways.len();
    Ok(Json(ListGiveawaysResponse { giveaways, total }))
}
