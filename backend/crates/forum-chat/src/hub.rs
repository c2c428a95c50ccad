use crate::{
    ChatMessage, ChatMetrics, ConnectionId, EvictionReason, HubEvent, HubEvents, HubHandle,
    ShutdownGuard, Subscriber,
};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Owner of the connection registry.
///
/// Runs as a single task and applies [`HubEvent`]s one at a time, so
/// membership never needs a lock. Delivery is always `try_send`: a
/// connection that cannot take a message right now is evicted, and the
/// loop never waits on any one connection.
pub struct Hub {
    /// thread id -> connections following it
    threads: HashMap<i64, HashMap<ConnectionId, mpsc::Sender<ChatMessage>>>,
    /// connection id -> thread id
    connections: HashMap<ConnectionId, i64>,
    events_rx: mpsc::Receiver<HubEvent>,
    sink: Arc<dyn HubEvents>,
    metrics: ChatMetrics,
}

impl Hub {
    pub fn new(
        event_capacity: usize,
        sink: Arc<dyn HubEvents>,
        metrics: ChatMetrics,
    ) -> (Self, HubHandle) {
        let (events_tx, events_rx) = mpsc::channel(event_capacity);

        let hub = Self {
            threads: HashMap::new(),
            connections: HashMap::new(),
            events_rx,
            sink,
            metrics,
        };

        (hub, HubHandle::new(events_tx))
    }

    /// Processes events until shutdown or until every handle is dropped.
    ///
    /// On exit the registry is dropped, closing every outbound queue.
    pub async fn run(mut self, mut shutdown: ShutdownGuard) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                event = self.events_rx.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
            }
        }

        let open = self.connections.len();
        self.threads.clear();
        self.connections.clear();
        self.metrics.active_connections(0);
        self.sink.stopped(open);
    }

    pub(crate) fn handle(&mut self, event: HubEvent) {
        match event {
            HubEvent::Register(subscriber) => self.register(subscriber),
            HubEvent::Unregister(connection_id) => self.unregister(connection_id),
            HubEvent::Broadcast(message) => self.broadcast(message),
            HubEvent::Replay {
                connection_id,
                messages,
                reply,
            } => {
                let enqueued = self.replay(connection_id, messages);
                let _ = reply.send(enqueued);
            }
            HubEvent::IsRegistered {
                connection_id,
                reply,
            } => {
                let _ = reply.send(self.connections.contains_key(&connection_id));
            }
            HubEvent::ConnectionCount { reply } => {
                let _ = reply.send(self.connections.len());
            }
            HubEvent::ThreadConnectionCount { thread_id, reply } => {
                let _ = reply.send(self.thread_connection_count(thread_id));
            }
        }
    }

    fn register(&mut self, subscriber: Subscriber) {
        let Subscriber {
            connection_id,
            thread_id,
            queue,
        } = subscriber;

        // Re-registering moves the connection
        self.remove(connection_id);

        self.threads
            .entry(thread_id)
            .or_default()
            .insert(connection_id, queue);
        self.connections.insert(connection_id, thread_id);

        self.sink.registered(
            connection_id,
            thread_id,
            self.thread_connection_count(thread_id),
        );
        self.metrics.active_connections(self.connections.len());
    }

    fn unregister(&mut self, connection_id: ConnectionId) {
        if let Some(thread_id) = self.remove(connection_id) {
            self.sink.unregistered(connection_id, thread_id);
            self.metrics.active_connections(self.connections.len());
        }
    }

    fn broadcast(&mut self, message: ChatMessage) {
        let thread_id = message.thread_id;
        let mut delivered = 0;
        let mut evicted = Vec::new();

        if let Some(subscribers) = self.threads.get(&thread_id) {
            for (connection_id, queue) in subscribers {
                match queue.try_send(message.clone()) {
                    Ok(()) => delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        evicted.push((*connection_id, EvictionReason::QueueFull))
                    }
                    Err(TrySendError::Closed(_)) => {
                        evicted.push((*connection_id, EvictionReason::WriterGone))
                    }
                }
            }
        }

        for (connection_id, reason) in evicted {
            self.evict(connection_id, reason);
        }

        self.sink.broadcast(thread_id, delivered);
        self.metrics.broadcast_published(delivered);
    }

    fn replay(&mut self, connection_id: ConnectionId, messages: Vec<ChatMessage>) -> usize {
        let Some(&thread_id) = self.connections.get(&connection_id) else {
            return 0;
        };

        let total = messages.len();
        let mut enqueued = 0;
        let mut eviction = None;

        if let Some(queue) = self
            .threads
            .get(&thread_id)
            .and_then(|subscribers| subscribers.get(&connection_id))
        {
            for message in messages {
                match queue.try_send(message) {
                    Ok(()) => enqueued += 1,
                    Err(TrySendError::Full(_)) => {
                        eviction = Some(EvictionReason::QueueFull);
                        break;
                    }
                    Err(TrySendError::Closed(_)) => {
                        eviction = Some(EvictionReason::WriterGone);
                        break;
                    }
                }
            }
        }

        if let Some(reason) = eviction {
            self.evict(connection_id, reason);
        }

        self.sink.replayed(connection_id, thread_id, enqueued, total);
        enqueued
    }

    fn evict(&mut self, connection_id: ConnectionId, reason: EvictionReason) {
        if let Some(thread_id) = self.remove(connection_id) {
            self.sink.evicted(connection_id, thread_id, reason);
            self.metrics.connection_evicted(reason);
            self.metrics.active_connections(self.connections.len());
        }
    }

    /// Drops the connection's sender, which closes its queue.
    fn remove(&mut self, connection_id: ConnectionId) -> Option<i64> {
        let thread_id = self.connections.remove(&connection_id)?;

        if let Some(subscribers) = self.threads.get_mut(&thread_id) {
            subscribers.remove(&connection_id);
            if subscribers.is_empty() {
                self.threads.remove(&thread_id);
            }
        }

        Some(thread_id)
    }

    fn thread_connection_count(&self, thread_id: i64) -> usize {
        self.threads.get(&thread_id).map_or(0, HashMap::len)
    }
}
