use forum_auth::JwtValidator;
use forum_chat::ChatState;
use forum_core::ContentValidator;

use std::sync::Arc;

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state for every route
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None when auth is disabled; callers then identify via `X-User-Id`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub validator: ContentValidator,
    pub chat: ChatState,
    pub metrics_handle: Option<PrometheusHandle>,
}

impl FromRef<AppState> for ChatState {
    fn from_ref(state: &AppState) -> Self {
        state.chat.clone()
    }
}
