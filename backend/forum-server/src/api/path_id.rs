use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Parses a numeric path segment such as `/thread/{id}`.
#[track_caller]
pub fn parse_id(raw: &str, field: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("Invalid {} format: '{}'", field, raw),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
