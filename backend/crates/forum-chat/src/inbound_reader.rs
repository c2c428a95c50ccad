use crate::{
    ChatMetrics, ChatUseCase, ConnectionId, ErrorAck, HubHandle, InboundPayload,
};

use std::fmt::Display;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use futures::{Stream, StreamExt};
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Why a reader stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderExit {
    /// Client sent a close frame
    ClientClosed,
    /// Transport stream ended without a close frame
    StreamEnded,
    TransportError(String),
    /// Nothing arrived within the heartbeat timeout
    Timeout,
    /// Writer is gone, acknowledgments cannot be delivered
    WriterGone,
    HubUnavailable,
}

impl ReaderExit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientClosed => "client_closed",
            Self::StreamEnded => "stream_ended",
            Self::TransportError(_) => "transport_error",
            Self::Timeout => "timeout",
            Self::WriterGone => "writer_gone",
            Self::HubUnavailable => "hub_unavailable",
        }
    }
}

/// Turns inbound frames into persisted, broadcast chat messages.
///
/// Bad frames and failed writes are answered with an [`ErrorAck`] and the
/// reader keeps going; only transport problems end it.
pub struct InboundReader {
    connection_id: ConnectionId,
    thread_id: i64,
    use_case: Arc<dyn ChatUseCase>,
    hub: HubHandle,
    acks: mpsc::Sender<ErrorAck>,
    read_timeout: Duration,
    metrics: ChatMetrics,
}

impl InboundReader {
    pub fn new(
        connection_id: ConnectionId,
        thread_id: i64,
        use_case: Arc<dyn ChatUseCase>,
        hub: HubHandle,
        acks: mpsc::Sender<ErrorAck>,
        read_timeout: Duration,
        metrics: ChatMetrics,
    ) -> Self {
        Self {
            connection_id,
            thread_id,
            use_case,
            hub,
            acks,
            read_timeout,
            metrics,
        }
    }

    pub async fn run<S, E>(self, mut stream: S) -> ReaderExit
    where
        S: Stream<Item = Result<Message, E>> + Unpin,
        E: Display,
    {
        loop {
            let frame = match timeout(self.read_timeout, stream.next()).await {
                Ok(frame) => frame,
                Err(_) => {
                    debug!(
                        "Connection {} silent for {:?}, closing",
                        self.connection_id, self.read_timeout
                    );
                    return ReaderExit::Timeout;
                }
            };

            let step = match frame {
                None => ControlFlow::Break(ReaderExit::StreamEnded),
                Some(Err(e)) => ControlFlow::Break(ReaderExit::TransportError(e.to_string())),
                Some(Ok(Message::Close(_))) => ControlFlow::Break(ReaderExit::ClientClosed),
                Some(Ok(Message::Text(text))) => self.handle_frame(text.as_str().as_bytes()).await,
                Some(Ok(Message::Binary(data))) => self.handle_frame(&data).await,
                // Pongs only count as liveness; pings are answered by the transport
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => ControlFlow::Continue(()),
            };

            if let ControlFlow::Break(exit) = step {
                return exit;
            }
        }
    }

    async fn handle_frame(&self, bytes: &[u8]) -> ControlFlow<ReaderExit> {
        self.metrics.message_received();

        let payload = match InboundPayload::decode(bytes) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(
                    "Undecodable frame on connection {}: {}",
                    self.connection_id, e
                );
                self.metrics.error_occurred("decode");
                return self.acknowledge(ErrorAck::invalid_message_format()).await;
            }
        };

        let new_post = payload.into_new_post(self.thread_id);

        match self.use_case.create_message(new_post).await {
            Ok(message) => {
                if self.hub.broadcast(message).await.is_err() {
                    return ControlFlow::Break(ReaderExit::HubUnavailable);
                }
                ControlFlow::Continue(())
            }
            Err(e) => {
                warn!(
                    "Failed to store chat message on thread {} from connection {}: {}",
                    self.thread_id, self.connection_id, e
                );
                self.metrics.error_occurred("persistence");
                self.acknowledge(ErrorAck::failed_to_create_post()).await
            }
        }
    }

    async fn acknowledge(&self, ack: ErrorAck) -> ControlFlow<ReaderExit> {
        match self.acks.send(ack).await {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(ReaderExit::WriterGone),
        }
    }
}
