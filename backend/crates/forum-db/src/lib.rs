pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::chat_repository::ChatRepository;
pub use repositories::post_repository::PostRepository;
pub use repositories::thread_repository::ThreadRepository;
pub use repositories::user_repository::UserRepository;
