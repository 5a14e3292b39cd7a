use std::sync::Arc;

use freeshelf_core::{
    Authenticator, CatalogSource, ClaimStore, Config, PreferenceStore, ProfileStore,
    SanitizedConfig, SearchHistoryStore, SnapshotCache,
};

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    source: Arc<dyn CatalogSource>,
    claims: Arc<dyn ClaimStore>,
    prefs: Arc<dyn PreferenceStore>,
    profiles: Arc<dyn ProfileStore>,
    history: Arc<dyn SearchHistoryStore>,
    cache: Arc<dyn SnapshotCache>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        source: Arc<dyn CatalogSource>,
        claims: Arc<dyn ClaimStore>,
        prefs: Arc<dyn PreferenceStore>,
        profiles: Arc<dyn ProfileStore>,
        history: Arc<dyn SearchHistoryStore>,
        cache: Arc<dyn SnapshotCache>,
    ) -> Self {
        Self {
            config,
            authenticator,
            source,
            claims,
            prefs,
            profiles,
            history,
            cache,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.source.as_ref()
    }

    pub fn claims(&self) -> &dyn ClaimStore {
        self.claims.as_ref()
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    pub fn profiles(&self) -> &dyn ProfileStore {
        self.profiles.as_ref()
    }

    pub fn history(&self) -> &dyn SearchHistoryStore {
        self.history.as_ref()
    }

    pub fn cache(&self) -> &dyn SnapshotCache {
        self.cache.as_ref()
    }
}
