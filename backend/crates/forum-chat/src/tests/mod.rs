mod property_tests;

use crate::{ChatError, ChatMessage, ChatUseCase, ConnectionId, EvictionReason, HubEvents};

use forum_core::NewPost;

use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Recorded {
    Registered(ConnectionId, i64),
    Unregistered(ConnectionId, i64),
    Evicted(ConnectionId, i64, EvictionReason),
    Broadcast(i64, usize),
    Replayed(ConnectionId, usize, usize),
    Stopped(usize),
}

/// HubEvents sink that keeps everything for assertions
#[derive(Default)]
pub(crate) struct RecordingHubEvents {
    events: Mutex<Vec<Recorded>>,
}

impl RecordingHubEvents {
    pub(crate) fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Recorded) {
        self.events.lock().unwrap().push(event);
    }
}

impl HubEvents for RecordingHubEvents {
    fn registered(&self, connection_id: ConnectionId, thread_id: i64, _thread_connections: usize) {
        self.push(Recorded::Registered(connection_id, thread_id));
    }

    fn unregistered(&self, connection_id: ConnectionId, thread_id: i64) {
        self.push(Recorded::Unregistered(connection_id, thread_id));
    }

    fn evicted(&self, connection_id: ConnectionId, thread_id: i64, reason: EvictionReason) {
        self.push(Recorded::Evicted(connection_id, thread_id, reason));
    }

    fn broadcast(&self, thread_id: i64, delivered: usize) {
        self.push(Recorded::Broadcast(thread_id, delivered));
    }

    fn replayed(&self, connection_id: ConnectionId, _thread_id: i64, enqueued: usize, total: usize) {
        self.push(Recorded::Replayed(connection_id, enqueued, total));
    }

    fn stopped(&self, open_connections: usize) {
        self.push(Recorded::Stopped(open_connections));
    }
}

pub(crate) fn message(thread_id: i64, content: &str) -> ChatMessage {
    ChatMessage {
        id: None,
        content: content.to_string(),
        thread_id,
        user_id: 1,
        create_at: Utc::now(),
    }
}

/// In-memory ChatUseCase; assigns ids from 1 and can be told to fail
#[derive(Default)]
pub(crate) struct FakeChatUseCase {
    stored: Mutex<Vec<ChatMessage>>,
    fail_writes: bool,
}

impl FakeChatUseCase {
    pub(crate) fn failing() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub(crate) fn stored(&self) -> Vec<ChatMessage> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatUseCase for FakeChatUseCase {
    async fn create_message(&self, new_post: NewPost) -> crate::Result<ChatMessage> {
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

    async fn list_messages_for_thread(&self, thread_id: i64) -> crate::Result<Vec<ChatMessage>> {
        Ok(self
            .stored()
            .into_iter()
            .filter(|message| message.thread_id == thread_id)
            .collect())
    }
}
