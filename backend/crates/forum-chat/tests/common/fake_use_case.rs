#![allow(dead_code)]

use forum_chat::{ChatError, ChatMessage, ChatUseCase, Result as ChatErrorResult};
use forum_core::{ErrorLocation, NewPost};

use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

/// In-memory chat store; ids are assigned from 1
#[derive(Default)]
pub struct FakeChatUseCase {
    stored: Mutex<Vec<ChatMessage>>,
    fail_writes: bool,
}

impl FakeChatUseCase {
    /// Every write fails as if the database were unavailable
    pub fn failing() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    /// Seeds `count` history messages on `thread_id`, oldest first
    pub fn with_history(thread_id: i64, count: usize) -> Self {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let stored = (0..count)
            .map(|i| ChatMessage {
                id: Some(i as i64 + 1),
                content: format!("history-{}", i + 1),
                thread_id,
                user_id: 1,
                create_at: base + Duration::seconds(i as i64),
            })
            .collect();

        Self {
            stored: Mutex::new(stored),
            fail_writes: false,
        }
    }

    pub fn stored(&self) -> Vec<ChatMessage> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatUseCase for FakeChatUseCase {
    async fn create_message(&self, new_post: NewPost) -> ChatErrorResult<ChatMessage> {
        if self.fail_writes {
            return Err(ChatError::Persistence {
                message: "database is locked".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut stored = self.stored.lock().unwrap();
        let message = ChatMessage {
            id: Some(stored.len() as i64 + 1),
            content: new_post.content,
            thread_id: new_post.thread_id,
            user_id: new_post.user_id,
            create_at: new_post.create_at,
        };
        stored.push(message.clone());
        Ok(message)
    }

    async fn list_messages_for_thread(&self, thread_id: i64) -> ChatErrorResult<Vec<ChatMessage>> {
        Ok(self
            .stored()
            .into_iter()
            .filter(|message| message.thread_id == thread_id)
            .collect())
    }
}
