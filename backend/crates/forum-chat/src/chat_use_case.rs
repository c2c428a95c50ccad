use crate::{ChatMessage, Result as ChatErrorResult};

use forum_core::NewPost;

use async_trait::async_trait;

/// Persistence boundary of live chat.
#[async_trait]
pub trait ChatUseCase: Send + Sync {
    /// Validates and stores a message, returning it with its assigned id.
    async fn create_message(&self, new_post: NewPost) -> ChatErrorResult<ChatMessage>;

    /// Chat history of a thread in persistence order.
    async fn list_messages_for_thread(&self, thread_id: i64) -> ChatErrorResult<Vec<ChatMessage>>;
}
