use crate::{ChatError, Result as ChatErrorResult};

use forum_core::NewPost;

use serde::Deserialize;

/// What a client sends on the chat socket.
///
/// Unknown fields such as `id`, `thread_id` or `create_at` are ignored, and
/// the thread always comes from the connection, never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundPayload {
    #[serde(default)]
    pub content: String,
    pub user_id: i64,
}

impl InboundPayload {
    #[track_caller]
    pub fn decode(bytes: &[u8]) -> ChatErrorResult<Self> {
        match serde_json::from_slice(bytes) {
            Ok(payload) => Ok(payload),
            Err(e) => Err(ChatError::decode(e)),
        }
    }

    pub fn into_new_post(self, thread_id: i64) -> NewPost {
        NewPost::new(self.content, thread_id, self.user_id)
    }
}
