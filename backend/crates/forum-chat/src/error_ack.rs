use serde::Serialize;

pub const INVALID_MESSAGE_FORMAT: &str = "invalid message format";
pub const FAILED_TO_CREATE_POST: &str = "failed to create post";

/// Error acknowledgment written back to the sender of a bad frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorAck {
    pub error: &'static str,
}

impl ErrorAck {
    pub fn invalid_message_format() -> Self {
        Self {
            error: INVALID_MESSAGE_FORMAT,
        }
    }

    pub fn failed_to_create_post() -> Self {
        Self {
            error: FAILED_TO_CREATE_POST,
        }
    }
}
