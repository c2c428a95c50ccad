use crate::DEFAULT_CORS_ORIGIN;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the REST API. Empty = any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_CORS_ORIGIN)],
        }
    }
}
