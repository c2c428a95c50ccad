use crate::{ChatError, ChatMessage, ChatMetrics, ConnectionId, ErrorAck, HubHandle};

use std::fmt::Display;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::ws::{CloseFrame, Message, close_code};
use futures::{Sink, SinkExt};
use log::{debug, error};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

/// Why a writer stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterExit {
    /// Queue was closed by the hub and fully drained
    QueueClosed,
    WriteFailed(String),
}

/// Drains one connection's queue onto the transport.
///
/// Also forwards the reader's error acknowledgments and sends heartbeat
/// pings. After the hub closes the queue, already queued messages are
/// still written before the close frame.
pub struct OutboundWriter {
    connection_id: ConnectionId,
    queue: mpsc::Receiver<ChatMessage>,
    acks: mpsc::Receiver<ErrorAck>,
    heartbeat_interval: Duration,
    hub: HubHandle,
    metrics: ChatMetrics,
}

impl OutboundWriter {
    pub fn new(
        connection_id: ConnectionId,
        queue: mpsc::Receiver<ChatMessage>,
        acks: mpsc::Receiver<ErrorAck>,
        heartbeat_interval: Duration,
        hub: HubHandle,
        metrics: ChatMetrics,
    ) -> Self {
        Self {
            connection_id,
            queue,
            acks,
            heartbeat_interval,
            hub,
            metrics,
        }
    }

    pub async fn run<S>(mut self, mut sink: S) -> WriterExit
    where
        S: Sink<Message> + Unpin,
        S::Error: Display,
    {
        let mut heartbeat = interval_at(
            Instant::now() + self.heartbeat_interval,
            self.heartbeat_interval,
        );
        let mut acks_open = true;

        let exit = loop {
            let outcome = tokio::select! {
                message = self.queue.recv() => match message {
                    Some(message) => {
                        let sent = self.write_json(&mut sink, &message).await;
                        if sent.is_ok() {
                            self.metrics.message_sent();
                        }
                        sent
                    }
                    None => {
                        let close = Message::Close(Some(CloseFrame {
                            code: close_code::NORMAL,
                            reason: "".into(),
                        }));
                        // Peer may already be gone
                        let _ = sink.send(close).await;
                        break WriterExit::QueueClosed;
                    }
                },
                ack = self.acks.recv(), if acks_open => match ack {
                    Some(ack) => self.write_json(&mut sink, &ack).await,
                    None => {
                        acks_open = false;
                        Ok(())
                    }
                },
                _ = heartbeat.tick() => sink
                    .send(Message::Ping(Bytes::new()))
                    .await
                    .map_err(|e| e.to_string()),
            };

            if let Err(reason) = outcome {
                break WriterExit::WriteFailed(reason);
            }
        };

        if let WriterExit::WriteFailed(reason) = &exit {
            debug!(
                "Write to connection {} failed: {}",
                self.connection_id, reason
            );
            self.metrics.error_occurred("write");
            // Hub may already be stopped
            let _ = self.hub.unregister(self.connection_id).await;
        }

        exit
    }

    async fn write_json<S, T>(&self, sink: &mut S, value: &T) -> Result<(), String>
    where
        S: Sink<Message> + Unpin,
        S::Error: Display,
        T: Serialize,
    {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                let e = ChatError::encode(e);
                error!(
                    "Failed to encode frame for connection {}: {}",
                    self.connection_id, e
                );
                self.metrics.error_occurred("encode");
                return Ok(());
            }
        };

        sink.send(Message::Text(json.into()))
            .await
            .map_err(|e| e.to_string())
    }
}
