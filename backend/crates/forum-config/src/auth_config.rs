use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, MIN_JWT_SECRET_LENGTH};

use std::path::Path;

use serde::Deserialize;

/// Bearer token settings for the REST API.
///
/// When disabled, callers identify themselves with the `X-User-Id` header.
/// When enabled, exactly one of `jwt_secret` (HS256) or
/// `jwt_public_key_path` (RS256, relative to the config dir) must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub jwt_secret: Option<String>,
    pub jwt_public_key_path: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }
}
