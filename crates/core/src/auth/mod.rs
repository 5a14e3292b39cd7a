mod api_key;
mod none;
mod traits;
mod types;

pub use api_key::*;
pub use none::*;
pub use traits::*;
pub use types::*;

use crate::config::AuthConfig;

/// Factory function to create authenticator from config
pub fn create_authenticator(config: &AuthConfig) -> Result<Box<dyn Authenticator>, AuthError> {
    use crate::config::AuthMethod;

    match config.method {
        AuthMethod::None => Ok(Box::new(NoneAuthenticator::new())),
        AuthMethod::ApiKey => {
            let keys = config.keys.clone().unwrap_or_default();
            if keys.is_empty() {
                return Err(AuthError::ConfigurationError(
                    "at least one key must be set when using ApiKey auth method".to_string(),
                ));
            }
            Ok(Box::new(ApiKeyAuthenticator::new(keys)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKeyEntry, AuthMethod};

    #[test]
    fn test_create_authenticator_none() {
        let config = AuthConfig {
            method: AuthMethod::None,
            keys: None,
        };
        let auth = create_authenticator(&config).unwrap();
        assert_eq!(auth.method_name(), "none");
    }

    #[test]
    fn test_create_authenticator_api_key() {
        let config = AuthConfig {
            method: AuthMethod::ApiKey,
            keys: Some(vec![ApiKeyEntry {
                name: "alice".to_string(),
                key: "secret-key".to_string(),
            }]),
        };
        let auth = create_authenticator(&config).unwrap();
        assert_eq!(auth.method_name(), "api_key");
    }

    #[test]
    fn test_create_authenticator_api_key_missing_keys() {
        let config = AuthConfig {
            method: AuthMethod::ApiKey,
            keys: None,
        };
        let result = create_authenticator(&config);
        assert!(matches!(result, Err(AuthError::ConfigurationError(_))));
    }
}
