//! Common test utilities for E2E testing with mocks.
//!
//! Provides a test fixture that builds an in-process router with a mock
//! catalog source and in-memory stores, so API tests run without external
//! infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use freeshelf_core::{
    config::{AuthConfig, AuthMethod, Config, DatabaseConfig, ServerConfig, SourcesConfig},
    testing::MockCatalogSource,
    NoneAuthenticator, SqliteClaimStore, SqlitePreferenceStore, SqliteProfileStore,
    SqliteSearchHistoryStore, SqliteSnapshotCache,
};

/// Re-export fixtures for test convenience
pub use freeshelf_core::testing::fixtures;

/// Test fixture for E2E testing with a mock catalog source.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new();
/// fixture.source.set_games(vec![fixtures::game("1", "Warframe", "Shooter")]).await;
/// let response = fixture.get("/api/v1/games").await;
/// assert_eq!(response.status, StatusCode::OK);
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog source - configure games and giveaways
    pub source: Arc<MockCatalogSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with anonymous auth and empty stores.
    pub fn new() -> Self {
        let source = Arc::new(MockCatalogSource::new());

        let config = Config {
            auth: AuthConfig {
                method: AuthMethod::None,
                keys: None,
            },
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            database: DatabaseConfig::default(),
            sources: SourcesConfig::default(),
        };

        let state = Arc::new(freeshelf_server::AppState::new(
            config,
            Arc::new(NoneAuthenticator::new()),
            Arc::clone(&source) as Arc<dyn freeshelf_core::CatalogSource>,
            Arc::new(SqliteClaimStore::in_memory().expect("claim store")),
            Arc::new(SqlitePreferenceStore::in_memory().expect("preference store")),
            Arc::new(SqliteProfileStore::in_memory().expect("profile store")),
            Arc::new(SqliteSearchHistoryStore::in_memory().expect("history store")),
            Arc::new(SqliteSnapshotCache::in_memory().expect("snapshot cache")),
        ));

        Self {
            router: freeshelf_server::create_router(state),
            source,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
