use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the numeric user id, as a string
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Checks run after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id().map(|_| ())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.sub.parse::<i64>().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub must be a numeric user id, got '{}'", self.sub),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
