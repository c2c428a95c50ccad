mod api;

use crate::AppState;

use forum_auth::JwtValidator;
use forum_chat::{
    ChatMetrics, ChatState, ConnectionConfig, Hub, LogHubEvents, ShutdownCoordinator,
    SqlChatUseCase,
};
use forum_core::ContentValidator;

use std::sync::Arc;

pub(crate) const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-server-tests-32-bytes";

pub(crate) async fn create_test_state(jwt_validator: Option<Arc<JwtValidator>>) -> AppState {
    let pool = forum_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let shutdown = ShutdownCoordinator::new();
    let metrics = ChatMetrics::default();
    let (hub, handle) = Hub::new(64, Arc::new(LogHubEvents), metrics.clone());
    tokio::spawn(hub.run(shutdown.subscribe_guard()));

    AppState {
        pool: pool.clone(),
        jwt_validator,
        validator: ContentValidator::default(),
        chat: ChatState {
            hub: handle,
            use_case: Arc::new(SqlChatUseCase::new(pool, ContentValidator::default())),
            config: ConnectionConfig::default(),
            metrics,
            shutdown,
        },
        metrics_handle: None,
    }
}
