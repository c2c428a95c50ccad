use forum_core::CoreError;
use forum_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message decode failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Message encode failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid thread id '{value}' {location}")]
    InvalidThreadId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Persistence failed: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    #[error("Hub is not running {location}")]
    HubUnavailable { location: ErrorLocation },
}

impl ChatError {
    #[track_caller]
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_thread_id(value: impl Into<String>) -> Self {
        Self::InvalidThreadId {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hub_unavailable() -> Self {
        Self::HubUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ChatError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            other => Self::Persistence {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for ChatError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        Self::Persistence {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
