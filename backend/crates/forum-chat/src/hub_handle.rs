use crate::{ChatError, ChatMessage, ConnectionId, HubEvent, Result as ChatErrorResult, Subscriber};

use tokio::sync::{mpsc, oneshot};

/// Cloneable front door to the [`Hub`](crate::Hub) task.
///
/// Every call is queued as an event; calls from one handle are applied in
/// the order they were made. All methods fail with `HubUnavailable` once
/// the hub has stopped.
#[derive(Debug, Clone)]
pub struct HubHandle {
    events_tx: mpsc::Sender<HubEvent>,
}

impl HubHandle {
    pub(crate) fn new(events_tx: mpsc::Sender<HubEvent>) -> Self {
        Self { events_tx }
    }

    pub async fn register(&self, subscriber: Subscriber) -> ChatErrorResult<()> {
        self.submit(HubEvent::Register(subscriber)).await
    }

    /// No-op for connections that are not registered.
    pub async fn unregister(&self, connection_id: ConnectionId) -> ChatErrorResult<()> {
        self.submit(HubEvent::Unregister(connection_id)).await
    }

    pub async fn broadcast(&self, message: ChatMessage) -> ChatErrorResult<()> {
        self.submit(HubEvent::Broadcast(message)).await
    }

    /// Resolves once the hub has enqueued the history, with the number enqueued.
    pub async fn replay(
        &self,
        connection_id: ConnectionId,
        messages: Vec<ChatMessage>,
    ) -> ChatErrorResult<usize> {
        self.query(|reply| HubEvent::Replay {
            connection_id,
            messages,
            reply,
        })
        .await
    }

    pub async fn is_registered(&self, connection_id: ConnectionId) -> ChatErrorResult<bool> {
        self.query(|reply| HubEvent::IsRegistered {
            connection_id,
            reply,
        })
        .await
    }

    pub async fn connection_count(&self) -> ChatErrorResult<usize> {
        self.query(|reply| HubEvent::ConnectionCount { reply }).await
    }

    pub async fn thread_connection_count(&self, thread_id: i64) -> ChatErrorResult<usize> {
        self.query(|reply| HubEvent::ThreadConnectionCount { thread_id, reply })
            .await
    }

    async fn submit(&self, event: HubEvent) -> ChatErrorResult<()> {
        self.events_tx
            .send(event)
            .await
            .map_err(|_| ChatError::hub_unavailable())
    }

    async fn query<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> HubEvent,
    ) -> ChatErrorResult<T> {
        let (reply, response) = oneshot::channel();
        self.submit(build(reply)).await?;
        response.await.map_err(|_| ChatError::hub_unavailable())
    }
}
