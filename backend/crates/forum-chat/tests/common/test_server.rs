#![allow(dead_code)]

use forum_chat::{
    ChatMetrics, ChatState, ChatUseCase, ConnectionConfig, Hub, HubHandle, LogHubEvents,
    ShutdownCoordinator,
};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;

pub const CHAT_ROUTE: &str = "/api/v2/ws/threads/{id}";

/// Test server with access to the chat state for assertions
pub struct TestChatServer {
    pub server: TestServer,
    pub state: ChatState,
}

impl TestChatServer {
    pub fn hub(&self) -> &HubHandle {
        &self.state.hub
    }
}

/// Starts a hub and serves the chat endpoint over a real HTTP transport
pub fn create_test_server(use_case: Arc<dyn ChatUseCase>) -> TestChatServer {
    create_test_server_with_config(use_case, ConnectionConfig::default())
}

pub fn create_test_server_with_config(
    use_case: Arc<dyn ChatUseCase>,
    config: ConnectionConfig,
) -> TestChatServer {
    let metrics = ChatMetrics::default();
    let shutdown = ShutdownCoordinator::new();
    let (hub, handle) = Hub::new(1024, Arc::new(LogHubEvents), metrics.clone());
    tokio::spawn(hub.run(shutdown.subscribe_guard()));

    let state = ChatState {
        hub: handle,
        use_case,
        config,
        metrics,
        shutdown,
    };

    let router = Router::new()
        .route(CHAT_ROUTE, get(forum_chat::thread_chat_handler))
        .with_state(state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestChatServer { server, state }
}

/// Polls the hub until `thread_id` has `expected` live connections
pub async fn wait_for_connections(hub: &HubHandle, thread_id: i64, expected: usize) {
    for _ in 0..100 {
        if hub.thread_connection_count(thread_id).await.unwrap() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!(
        "thread {} never reached {} connections (has {})",
        thread_id,
        expected,
        hub.thread_connection_count(thread_id).await.unwrap()
    );
}
