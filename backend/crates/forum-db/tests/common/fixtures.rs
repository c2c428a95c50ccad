use forum_core::{NewPost, NewThread};

use chrono::{Duration, Utc};

pub fn new_thread(user_id: i64) -> NewThread {
    NewThread::new("Test thread", "Thread body", user_id)
}

pub fn new_post(thread_id: i64, user_id: i64, content: &str) -> NewPost {
    NewPost::new(content, thread_id, user_id)
}

/// A post stamped `offset_secs` from now
pub fn new_post_at(thread_id: i64, user_id: i64, content: &str, offset_secs: i64) -> NewPost {
    NewPost {
        content: content.to_string(),
        thread_id,
        user_id,
        create_at: Utc::now() + Duration::seconds(offset_secs),
    }
}
