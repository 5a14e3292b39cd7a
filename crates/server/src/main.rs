use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freeshelf_core::{
    create_authenticator, load_config, validate_config, Authenticator, CatalogSource, ClaimStore,
    CombinedSourceClient, FreeToGameClient, GamerPowerClient, PreferenceStore, ProfileStore,
    SearchHistoryStore, SnapshotCache, SqliteClaimStore, SqlitePreferenceStore, SqliteProfileStore,
    SqliteSearchHistoryStore, SqliteSnapshotCache,
};

use freeshelf_server::{create_router, AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("FREESHELF_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Auth method: {:?}", config.auth.method);
    info!("Database path: {:?}", config.database.path);

    // Create authenticator
    let authenticator: Arc<dyn Authenticator> = Arc::from(
        create_authenticator(&config.auth).context("Failed to create authenticator")?,
    );
    info!("Using authenticator: {}", authenticator.method_name());

    // Create SQLite stores
    let claims: Arc<dyn ClaimStore> = Arc::new(
        SqliteClaimStore::new(&config.database.path).context("Failed to create claim store")?,
    );
    let prefs: Arc<dyn PreferenceStore> = Arc::new(
        SqlitePreferenceStore::new(&config.database.path)
            .context("Failed to create preference store")?,
    );
    let profiles: Arc<dyn ProfileStore> = Arc::new(
        SqliteProfileStore::new(&config.database.path).context("Failed to create profile store")?,
    );
    let history: Arc<dyn SearchHistoryStore> = Arc::new(
        SqliteSearchHistoryStore::new(&config.database.path)
            .context("Failed to create search history store")?,
    );
    let cache: Arc<dyn SnapshotCache> = Arc::new(
        SqliteSnapshotCache::new(&config.database.path)
            .context("Failed to create snapshot cache")?,
    );
    info!("Stores initialized");

    // Create upstream source clients
    let freetogame = match &config.sources.freetogame {
        Some(cfg) => {
            info!("Initializing FreeToGame client");
            Some(FreeToGameClient::new(cfg.clone()).context("Failed to create FreeToGame client")?)
        }
        None => {
            info!("FreeToGame source not configured; game endpoints will report it as unavailable");
            None
        }
    };
    let gamerpower = match &config.sources.gamerpower {
        Some(cfg) => {
            info!("Initializing GamerPower client");
            Some(GamerPowerClient::new(cfg.clone()).context("Failed to create GamerPower client")?)
        }
        None => {
            info!(
                "GamerPower source not configured; giveaway endpoints will report it as unavailable"
            );
            None
        }
    };
    let source: Arc<dyn CatalogSource> =
        Arc::new(CombinedSourceClient::new(freetogame, gamerpower));

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        authenticator,
        source,
        claims,
        prefs,
        profiles,
        history,
        cache,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
