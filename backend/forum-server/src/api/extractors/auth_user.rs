//! Axum extractor for authenticated REST callers

use crate::{ApiError, AppState};

use forum_auth::extract_bearer;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use error_location::ErrorLocation;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The numeric id of the calling user.
///
/// With auth enabled the id is the `sub` claim of a valid bearer token.
/// With auth disabled it comes from the `X-User-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub i64);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match &state.jwt_validator {
                Some(validator) => {
                    let header_value = parts
                        .headers
                        .get(header::AUTHORIZATION)
                        .and_then(|value| value.to_str().ok());
                    let token = extract_bearer(header_value)?;
                    let claims = validator.validate(token)?;
                    let user_id = claims.user_id()?;
                    log::debug!("Authenticated user {} via bearer token", user_id);
                    Ok(AuthUser(user_id))
                }
                None => {
                    let raw = parts
                        .headers
                        .get(USER_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .ok_or_else(|| ApiError::Unauthorized {
                            code: "MISSING_USER_ID",
                            message: format!("Missing {} header", USER_ID_HEADER),
                            location: ErrorLocation::from(Location::caller()),
                        })?;

                    raw.trim()
                        .parse::<i64>()
                        .map(AuthUser)
                        .map_err(|_| ApiError::Unauthorized {
                            code: "INVALID_USER_ID",
                            message: format!("Invalid {} header: '{}'", USER_ID_HEADER, raw),
                            location: ErrorLocation::from(Location::caller()),
                        })
                }
            }
        }
    }
}
