use crate::{ChatMessage, ChatUseCase, Result as ChatErrorResult};

use forum_core::{ContentValidator, NewPost};
use forum_db::ChatRepository;

use async_trait::async_trait;
use sqlx::SqlitePool;

/// [`ChatUseCase`] backed by the forum database.
#[derive(Clone)]
pub struct SqlChatUseCase {
    chat: ChatRepository,
    validator: ContentValidator,
}

impl SqlChatUseCase {
    pub fn new(pool: SqlitePool, validator: ContentValidator) -> Self {
        Self {
            chat: ChatRepository::new(pool),
            validator,
        }
    }
}

#[async_trait]
impl ChatUseCase for SqlChatUseCase {
    async fn create_message(&self, new_post: NewPost) -> ChatErrorResult<ChatMessage> {
        self.validator.validate_post_content(&new_post.content)?;

        let post = self.chat.create_linked_post(&new_post).await?;

        Ok(post.into())
    }

    async fn list_messages_for_thread(&self, thread_id: i64) -> ChatErrorResult<Vec<ChatMessage>> {
        let posts = self.chat.list_chat_posts(thread_id).await?;

        Ok(posts.into_iter().map(ChatMessage::from).collect())
    }
}
