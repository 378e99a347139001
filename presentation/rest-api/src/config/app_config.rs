use super::{
    api_key_config::{ApiKeyConfig, ConfigError},
    cors_config,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub api_key: ApiKeyConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            api_key: ApiKeyConfig::from_env()?,
        })
    }
}
