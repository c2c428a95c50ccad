use crate::{ChatMessage, ConnectionId, Subscriber};

use tokio::sync::oneshot;

/// Everything the hub does, in the order it was submitted.
#[derive(Debug)]
pub enum HubEvent {
    Register(Subscriber),
    Unregister(ConnectionId),
    Broadcast(ChatMessage),
    /// Enqueue history for one connection; replies with how many were enqueued
    Replay {
        connection_id: ConnectionId,
        messages: Vec<ChatMessage>,
        reply: oneshot::Sender<usize>,
    },
    IsRegistered {
        connection_id: ConnectionId,
        reply: oneshot::Sender<bool>,
    },
    ConnectionCount {
        reply: oneshot::Sender<usize>,
    },
    ThreadConnectionCount {
        thread_id: i64,
        reply: oneshot::Sender<usize>,
    },
}
