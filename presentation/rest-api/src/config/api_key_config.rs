use std::env;

use subtle::ConstantTimeEq;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.api_key_missing: API_KEY must be set")]
    ApiKeyMissing,
    #[error("config.api_key_blank: API_KEY must not be blank")]
    ApiKeyBlank,
}

/// The shared secret every product request must present in `X-API-Key`.
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::ApiKeyBlank);
        }
        Ok(Self { key })
    }

    /// Load the API key from environment variables
    ///
    /// Environment variables:
    /// - API_KEY: Valid key for the `X-API-Key` header (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = env::var("API_KEY").map_err(|_| ConfigError::ApiKeyMissing)?;
        Self::new(key)
    }

    /// Constant-time comparison against a presented key.
    pub fn matches(&self, candidate: &str) -> bool {
        self.key.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}
