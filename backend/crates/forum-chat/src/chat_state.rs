use crate::{
    ChatError, ChatMetrics, ChatSession, ChatUseCase, ConnectionConfig, HubHandle,
    Result as ChatErrorResult, ShutdownCoordinator,
};

use std::sync::Arc;

use axum::extract::ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::{debug, error, warn};

pub const INVALID_THREAD_ID_REASON: &str = "Invalid thread ID";

/// Shared state for the live chat endpoint
#[derive(Clone)]
pub struct ChatState {
    pub hub: HubHandle,
    pub use_case: Arc<dyn ChatUseCase>,
    pub config: ConnectionConfig,
    pub metrics: ChatMetrics,
    pub shutdown: ShutdownCoordinator,
}

/// `GET /ws/threads/{id}`: upgrade to a live chat connection on thread `id`.
///
/// A malformed id still completes the handshake, then gets a policy
/// violation close frame without ever being registered. The connection
/// limit is checked against the hub's count before upgrading, so
/// concurrent upgrades may briefly exceed it.
pub async fn thread_chat_handler(
    State(state): State<ChatState>,
    Path(raw_thread_id): Path<String>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Response {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    if !state.config.is_origin_allowed(origin) {
        warn!("Rejected chat upgrade from origin {:?}", origin);
        state.metrics.connection_rejected("origin");
        return StatusCode::FORBIDDEN.into_response();
    }

    let thread_id = match parse_thread_id(&raw_thread_id) {
        Ok(thread_id) => thread_id,
        Err(e) => {
            debug!("Rejected chat upgrade: {}", e);
            state.metrics.connection_rejected("invalid_thread_id");
            return ws.on_upgrade(reject_invalid_thread);
        }
    };

    match state.hub.connection_count().await {
        Ok(count) if count >= state.config.max_connections => {
            warn!(
                "Rejected chat upgrade: {} connections (max {})",
                count, state.config.max_connections
            );
            state.metrics.connection_rejected("limit");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
        Ok(_) => {}
        Err(e) => {
            error!("Chat hub unavailable: {}", e);
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    }

    ws.on_upgrade(move |socket| handle_socket(socket, thread_id, state))
}

#[track_caller]
pub fn parse_thread_id(raw: &str) -> ChatErrorResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ChatError::invalid_thread_id(raw))
}

async fn reject_invalid_thread(mut socket: WebSocket) {
    let close = Message::Close(Some(CloseFrame {
        code: close_code::POLICY,
        reason: INVALID_THREAD_ID_REASON.into(),
    }));

    let _ = socket.send(close).await;
}

async fn handle_socket(socket: WebSocket, thread_id: i64, state: ChatState) {
    let ChatState {
        hub,
        use_case,
        config,
        metrics,
        shutdown,
    } = state;

    let session = ChatSession::new(thread_id, config, use_case, hub, metrics);
    let connection_id = session.connection_id();

    if let Err(e) = session.run(socket, shutdown.subscribe_guard()).await {
        error!("Chat connection {} failed: {}", connection_id, e);
    }
}
