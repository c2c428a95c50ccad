use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

async fn database_ok(state: &AppState) -> bool {
    sqlx::query("SELECT 1").execute(&state.pool).await.is_ok()
}

/// GET /health - Component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = database_ok(&state).await;
    let chat_connections = state.chat.hub.connection_count().await.ok();

    let healthy = database && chat_connections.is_some();
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let health = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database { "operational" } else { "unavailable" },
            "chat_hub": if chat_connections.is_some() { "operational" } else { "unavailable" },
            "auth": if state.jwt_validator.is_some() { "enabled" } else { "disabled" },
        },
        "chat_connections": chat_connections,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe: database reachable and chat hub running
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.chat.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    if !database_ok(&state).await || state.chat.hub.connection_count().await.is_err() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics_export(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics exporter not installed").into_response(),
    }
}
