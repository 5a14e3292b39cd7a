use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::source::{FreeToGameConfig, GamerPowerConfig};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    /// Named API keys (required when method = "api_key"). The name of the
    /// matching key becomes the authenticated user id.
    #[serde(default)]
    pub keys: Option<Vec<ApiKeyEntry>>,
}

/// A named API key
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiKeyEntry {
    pub name: String,
    pub key: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("freeshelf.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    None,
    ApiKey,
}

/// Upstream catalog source configuration. Both sources are optional; an
/// unconfigured source makes its endpoints answer with a source error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub freetogame: Option<FreeToGameConfig>,
    #[serde(default)]
    pub gamerpower: Option<GamerPowerConfig>,
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub auth: SanitizedAuthConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub sources: SanitizedSourcesConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAuthConfig {
    pub method: String,
    /// Names of configured keys; the keys themselves are never echoed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSourcesConfig {
    pub freetogame_configured: bool,
    pub gamerpower_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            auth: SanitizedAuthConfig {
                method: match config.auth.method {
                    AuthMethod::None => "none".to_string(),
                    AuthMethod::ApiKey => "api_key".to_string(),
                },
                key_names: config
                    .auth
                    .keys
                    .as_ref()
                    .map(|keys| keys.iter().map(|k| k.name.clone()).collect()),
            },
            server: config.server.clone(),
            database: config.database.clone(),
            sources: SanitizedSourcesConfig {
                freetogame_configured: config.sources.freetogame.is_some(),
                gamerpower_configured: config.sources.gamerpower.is_some(),
            },
        }
    }
}
