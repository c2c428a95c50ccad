pub mod content_limits;
pub mod content_validator;
