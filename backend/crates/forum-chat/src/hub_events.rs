use crate::ConnectionId;

use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionReason {
    /// Outbound queue was full
    QueueFull,
    /// The connection's writer already went away
    WriterGone,
}

impl EvictionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueueFull => "queue_full",
            Self::WriterGone => "writer_gone",
        }
    }
}

/// Structured events emitted by the hub loop.
pub trait HubEvents: Send + Sync {
    fn registered(&self, connection_id: ConnectionId, thread_id: i64, thread_connections: usize);

    fn unregistered(&self, connection_id: ConnectionId, thread_id: i64);

    fn evicted(&self, connection_id: ConnectionId, thread_id: i64, reason: EvictionReason);

    fn broadcast(&self, thread_id: i64, delivered: usize);

    fn replayed(&self, connection_id: ConnectionId, thread_id: i64, enqueued: usize, total: usize);

    fn stopped(&self, open_connections: usize);
}

/// Forwards hub events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHubEvents;

impl HubEvents for LogHubEvents {
    fn registered(&self, connection_id: ConnectionId, thread_id: i64, thread_connections: usize) {
        info!(
            "Connection {} joined thread {} ({} connected)",
            connection_id, thread_id, thread_connections
        );
    }

    fn unregistered(&self, connection_id: ConnectionId, thread_id: i64) {
        info!("Connection {} left thread {}", connection_id, thread_id);
    }

    fn evicted(&self, connection_id: ConnectionId, thread_id: i64, reason: EvictionReason) {
        warn!(
            "Evicted connection {} from thread {}: {}",
            connection_id,
            thread_id,
            reason.as_str()
        );
    }

    fn broadcast(&self, thread_id: i64, delivered: usize) {
        debug!(
            "Broadcast on thread {} delivered to {} connections",
            thread_id, delivered
        );
    }

    fn replayed(&self, connection_id: ConnectionId, thread_id: i64, enqueued: usize, total: usize) {
        debug!(
            "Replayed {}/{} messages of thread {} to connection {}",
            enqueued, total, thread_id, connection_id
        );
    }

    fn stopped(&self, open_connections: usize) {
        info!(
            "Chat hub stopped, closing {} open connections",
            open_connections
        );
    }
}
