use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{games, giveaways, handlers, history, library, middleware, prefs, profile};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Games catalog
        .route("/games", get(games::list_games))
        .route("/games/{id}", get(games::get_game))
        .route("/feed", get(games::get_feed))
        // Giveaways
        .route("/giveaways", get(giveaways::list_giveaways))
        // Library (claimed items)
        .route("/library", get(library::list_library))
        .route("/library", post(library::claim_item))
        .route("/library/{id}", delete(library::unclaim_item))
        // Preferences
        .route("/preferences", get(prefs::get_preferences))
        .route("/preferences", put(prefs::put_preferences))
        // Profile
        .route("/profile", get(profile::get_profile))
        .route("/profile", put(profile::put_profile))
        // Search history
        .route("/search-history", get(history::list_history))
        .route("/search-history", post(history::record_search))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
