#![allow(dead_code)]

use forum_chat::ChatMessage;

use axum_test::{TestServer, TestWebSocket, WsMessage};
use serde_json::Value;

/// Chat WebSocket test client wrapper
pub struct ChatTestClient {
    ws: TestWebSocket,
}

impl ChatTestClient {
    /// Connects to the live chat of `thread` (any path segment, valid or not)
    pub async fn connect(server: &TestServer, thread: &str) -> Self {
        let ws = server
            .get_websocket(&format!("/api/v2/ws/threads/{}", thread))
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn receive_message(&mut self) -> ChatMessage {
        self.ws.receive_json::<ChatMessage>().await
    }

    pub async fn receive_json(&mut self) -> Value {
        self.ws.receive_json::<Value>().await
    }

    pub async fn receive_raw(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
