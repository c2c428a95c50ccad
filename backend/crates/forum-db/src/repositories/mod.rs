pub mod chat_repository;
pub mod post_repository;
pub mod thread_repository;
pub mod user_repository;

mod rows;
