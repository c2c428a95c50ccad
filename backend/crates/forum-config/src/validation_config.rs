use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 1000;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 500;

pub const MIN_CONTENT_LENGTH: usize = 1;
pub const MAX_CONTENT_LENGTH: usize = 100000;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 5000;

/// Field limits for threads and posts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    /// Applies to thread bodies and posts (chat messages included)
    pub max_content_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_content_length < MIN_CONTENT_LENGTH
            || self.max_content_length > MAX_CONTENT_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_content_length must be {}-{}, got {}",
                MIN_CONTENT_LENGTH, MAX_CONTENT_LENGTH, self.max_content_length
            )));
        }

        Ok(())
    }
}
