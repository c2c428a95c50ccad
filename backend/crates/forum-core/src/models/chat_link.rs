use serde::{Deserialize, Serialize};

/// Membership of a post in a thread's live chat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLink {
    pub thread_id: i64,
    pub user_id: i64,
    pub post_id: i64,
}
