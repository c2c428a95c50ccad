use forum_core::Thread;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateThreadResponse {
    pub message: String,
    pub thread: Thread,
}
