use super::{types::Config, AuthMethod, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Auth section exists (enforced by serde)
/// - Server port is not 0
/// - api_key auth has at least one key, with non-blank unique names
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Auth validation
    if matches!(config.auth.method, AuthMethod::ApiKey) {
        let keys = config.auth.keys.as_deref().unwrap_or_default();
        if keys.is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.keys must contain at least one key when method is api_key".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in keys {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "auth.keys entries must have a non-blank name".to_string(),
                ));
            }
            if entry.key.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "auth key '{}' has an empty key value",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate auth key name '{}'",
                    entry.name
                )));
            }
        }
    }

    Ok(())
}
