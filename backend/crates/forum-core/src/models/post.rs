use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub create_at: DateTime<Utc>,
    pub thread_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub content: String,
    pub thread_id: i64,
    pub user_id: i64,
    pub create_at: DateTime<Utc>,
}

impl NewPost {
    /// Stamps the post with the current time.
    pub fn new(content: impl Into<String>, thread_id: i64, user_id: i64) -> Self {
        Self {
            content: content.into(),
            thread_id,
            user_id,
            create_at: Utc::now(),
        }
    }
}
