use forum_core::Post;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message as it travels to clients.
///
/// `id` is absent until the message has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub content: String,
    pub thread_id: i64,
    pub user_id: i64,
    pub create_at: DateTime<Utc>,
}

impl From<Post> for ChatMessage {
    fn from(post: Post) -> Self {
        Self {
            id: Some(post.id),
            content: post.content,
            thread_id: post.thread_id,
            user_id: post.user_id,
            create_at: post.create_at,
        }
    }
}
