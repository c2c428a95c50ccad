use crate::{ChatMessage, ConnectionId};

use tokio::sync::mpsc;

/// A connection as the hub sees it: which thread it follows and where to deliver.
///
/// The hub holds the only sender of `queue`, so dropping a subscriber closes
/// the connection's outbound queue.
#[derive(Debug)]
pub struct Subscriber {
    pub connection_id: ConnectionId,
    pub thread_id: i64,
    pub queue: mpsc::Sender<ChatMessage>,
}

impl Subscriber {
    /// Creates the subscriber together with the receiving end of its queue.
    pub fn new(
        connection_id: ConnectionId,
        thread_id: i64,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<ChatMessage>) {
        let (queue, receiver) = mpsc::channel(capacity);

        (
            Self {
                connection_id,
                thread_id,
                queue,
            },
            receiver,
        )
    }
}
