use crate::{
    ChatMetrics, ChatUseCase, ConnectionConfig, ConnectionId, HubHandle, InboundReader,
    OutboundWriter, Result as ChatErrorResult, ShutdownGuard, Subscriber, replay_history,
};

use std::sync::Arc;

use axum::extract::ws::WebSocket;
use futures::StreamExt;
use log::{info, warn};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Capacity of the reader -> writer acknowledgment channel
const ACK_BUFFER_SIZE: usize = 16;

/// One live chat connection bound to a thread.
///
/// Registers with the hub, schedules history replay, then runs the reader
/// and writer until either side ends or shutdown is signalled. The
/// connection is always unregistered on the way out.
pub struct ChatSession {
    connection_id: ConnectionId,
    thread_id: i64,
    config: ConnectionConfig,
    use_case: Arc<dyn ChatUseCase>,
    hub: HubHandle,
    metrics: ChatMetrics,
}

impl ChatSession {
    pub fn new(
        thread_id: i64,
        config: ConnectionConfig,
        use_case: Arc<dyn ChatUseCase>,
        hub: HubHandle,
        metrics: ChatMetrics,
    ) -> Self {
        Self {
            connection_id: ConnectionId::new(),
            thread_id,
            config,
            use_case,
            hub,
            metrics,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    pub async fn run(self, socket: WebSocket, mut shutdown: ShutdownGuard) -> ChatErrorResult<()> {
        let (subscriber, queue) = Subscriber::new(
            self.connection_id,
            self.thread_id,
            self.config.send_buffer_size,
        );
        self.hub.register(subscriber).await?;

        self.metrics.connection_established();
        info!(
            "Chat connection {} opened on thread {}",
            self.connection_id, self.thread_id
        );

        let replay_task = tokio::spawn({
            let use_case = Arc::clone(&self.use_case);
            let hub = self.hub.clone();
            let connection_id = self.connection_id;
            let thread_id = self.thread_id;
            async move {
                if let Err(e) = replay_history(use_case, hub, connection_id, thread_id).await {
                    warn!(
                        "History replay for connection {} on thread {} failed: {}",
                        connection_id, thread_id, e
                    );
                }
            }
        });

        let (sink, stream) = socket.split();
        let (ack_tx, ack_rx) = mpsc::channel(ACK_BUFFER_SIZE);

        let writer = OutboundWriter::new(
            self.connection_id,
            queue,
            ack_rx,
            self.config.heartbeat_interval,
            self.hub.clone(),
            self.metrics.clone(),
        );
        let mut writer_task = tokio::spawn(writer.run(sink));

        let reader = InboundReader::new(
            self.connection_id,
            self.thread_id,
            Arc::clone(&self.use_case),
            self.hub.clone(),
            ack_tx,
            self.config.heartbeat_timeout,
            self.metrics.clone(),
        );

        let mut writer_finished = false;
        let reason = tokio::select! {
            exit = reader.run(stream) => exit.as_str(),
            _ = &mut writer_task => {
                writer_finished = true;
                "writer_closed"
            }
            _ = shutdown.wait() => "shutdown",
        };

        // Closes the queue; the writer drains what is left and sends a close frame
        let _ = self.hub.unregister(self.connection_id).await;
        replay_task.abort();

        if !writer_finished
            && timeout(self.config.heartbeat_timeout, &mut writer_task)
                .await
                .is_err()
        {
            warn!(
                "Writer for connection {} did not drain in time",
                self.connection_id
            );
            writer_task.abort();
        }

        self.metrics.connection_closed(reason);
        info!(
            "Chat connection {} on thread {} closed ({})",
            self.connection_id, self.thread_id, reason
        );

        Ok(())
    }
}
