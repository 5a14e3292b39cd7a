pub mod auth;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod history;
pub mod library;
pub mod prefs;
pub mod profile;
pub mod source;
pub mod testing;

pub use auth::{
    create_authenticator, ApiKeyAuthenticator, AuthError, AuthRequest, Authenticator, Identity,
    NoneAuthenticator,
};
pub use cache::{CacheError, CachedSnapshot, SnapshotCache, SqliteSnapshotCache};
pub use catalog::{filter_by_genre, filter_by_title, CatalogItem, ItemKind};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiKeyEntry, AuthMethod, Config,
    ConfigError, SanitizedConfig,
};
pub use feed::{compose, shuffle, PreferenceSet};
pub use history::{HistoryError, SearchHistoryStore, SqliteSearchHistoryStore, HISTORY_LIMIT};
pub use library::{
    ClaimError, ClaimRequest, ClaimStore, ClaimedItem, SqliteClaimStore,
};
pub use prefs::{PreferenceError, PreferenceStore, SqlitePreferenceStore};
pub use profile::{
    Profile, ProfileError, ProfileStore, SqliteProfileStore, DEFAULT_DISPLAY_NAME,
};
pub use source::{
    CatalogSource, CombinedSourceClient, FreeToGameClient, FreeToGameConfig, GamerPowerClient,
    GamerPowerConfig, GiveawayFilter, SourceError,
};
