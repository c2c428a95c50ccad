use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discussion topic. Posts and the live chat both hang off a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub create_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Thread fields supplied by the author before persistence assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewThread {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl NewThread {
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
        }
    }
}

/// Editable thread fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreadUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
}
