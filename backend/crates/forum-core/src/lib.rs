pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::chat_link::ChatLink;
pub use models::post::{NewPost, Post};
pub use models::thread::{NewThread, Thread, ThreadUpdate};
pub use models::user::User;
pub use models::user_role::UserRole;
pub use validation::content_limits::ContentLimits;
pub use validation::content_validator::ContentValidator;

#[cfg(test)]
mod tests;
