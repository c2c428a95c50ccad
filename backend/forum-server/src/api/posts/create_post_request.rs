use serde::Deserialize;

/// Body of `POST /threads/posts`.
///
/// A `user_id` in the body is ignored; the author is the caller.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub thread_id: i64,
}
