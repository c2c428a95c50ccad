#![allow(dead_code)]

//! Test infrastructure for forum-server API tests

use forum_chat::{
    ChatMetrics, ChatState, ConnectionConfig, Hub, LogHubEvents, ShutdownCoordinator,
    SqlChatUseCase,
};
use forum_core::{ContentValidator, UserRole};
use forum_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// AppState over an in-memory database with a running chat hub; auth disabled
pub async fn create_test_app_state() -> AppState {
    let pool = forum_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let shutdown = ShutdownCoordinator::new();
    let metrics = ChatMetrics::default();
    let (hub, handle) = Hub::new(64, Arc::new(LogHubEvents), metrics.clone());
    tokio::spawn(hub.run(shutdown.subscribe_guard()));

    AppState {
        pool: pool.clone(),
        jwt_validator: None,
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

pub fn create_test_router(state: AppState) -> Router {
    build_router(state, &[TEST_ORIGIN.to_string()])
}

/// Inserts a user row and returns its id
pub async fn create_test_user(pool: &SqlitePool, name: &str, role: UserRole) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, role) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@example.com", name))
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .expect("Failed to create test user")
}

/// Sends a request through the router, acting as `user_id` when given
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user_id: Option<i64>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id.to_string());
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Creates a thread through the API and returns its id
pub async fn create_thread(app: &Router, user_id: i64, title: &str) -> i64 {
    let response = send(
        app,
        "POST",
        "/api/v2/threads",
        Some(user_id),
        Some(serde_json::json!({"title": title, "content": "Thread body"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    json_body(response).await["id"].as_i64().unwrap()
}
