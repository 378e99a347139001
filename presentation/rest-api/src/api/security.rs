use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use crate::config::api_key_config::ApiKeyConfig;

/// Shared-secret authentication through the `X-API-Key` header.
///
/// The wrapped value is a masked form of the presented key, safe to log.
/// A missing or wrong key makes poem-openapi answer 401 before any handler runs.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-API-Key",
    key_in = "header",
    checker = "api_key_checker"
)]
pub struct ApiKeyAuth(pub String);

async fn api_key_checker(req: &Request, api_key: ApiKey) -> Option<String> {
    let Some(config) = req.data::<ApiKeyConfig>() else {
        tracing::error!("API key configuration is not attached to the request");
        return None;
    };

    if config.matches(&api_key.key) {
        Some(mask_key(&api_key.key))
    } else {
        tracing::warn!("Rejected request with invalid API key {}", mask_key(&api_key.key));
        None
    }
}

/// Keeps at most a quarter of the key, capped at four characters.
fn mask_key(key: &str) -> String {
    let visible = (key.chars().count() / 4).min(4);
    let prefix: String = key.chars().take(visible).collect();
    format!("{prefix}***")
}
