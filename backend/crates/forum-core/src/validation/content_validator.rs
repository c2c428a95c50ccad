use crate::{ContentLimits, CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Validates thread and post text before it reaches the repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentValidator {
    limits: ContentLimits,
}

impl ContentValidator {
    pub fn new(limits: ContentLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ContentLimits {
        self.limits
    }

    #[track_caller]
    pub fn validate_post_content(&self, content: &str) -> CoreResult<()> {
        Self::validate_length(content, "content", self.limits.max_content_length)
    }

    #[track_caller]
    pub fn validate_thread(&self, title: &str, content: &str) -> CoreResult<()> {
        Self::validate_length(content, "content", self.limits.max_content_length)?;
        Self::validate_length(title, "title", self.limits.max_title_length)
    }

    #[track_caller]
    fn validate_length(value: &str, field: &str, max_length: usize) -> CoreResult<()> {
        let length = value.chars().count();

        if value.trim().is_empty() {
            return Err(CoreError::Validation {
                message: format!("{} cannot be empty", field),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if length > max_length {
            return Err(CoreError::Validation {
                message: format!(
                    "{} must not exceed {} characters, got {}",
                    field, max_length, length
                ),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
