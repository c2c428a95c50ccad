pub mod chat_link;
pub mod post;
pub mod thread;
pub mod user;
pub mod user_role;
