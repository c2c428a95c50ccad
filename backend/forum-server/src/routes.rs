use crate::{
    AppState, create_post, create_thread, delete_post, delete_thread, get_thread, health,
    list_chat_messages, list_thread_posts, list_threads, list_user_posts, list_user_threads,
    update_thread,
};

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{delete, get, post},
};
use log::warn;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const API_PREFIX: &str = "/api/v2";

/// Build the application router with all endpoints
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        // Public
        .route("/threads", get(list_threads).post(create_thread).put(update_thread))
        .route("/thread/{id}", get(get_thread))
        .route("/thread/{id}/chat", get(list_chat_messages))
        .route("/ws/threads/{id}", get(forum_chat::thread_chat_handler))
        // Authenticated through the AuthUser extractor
        .route("/threads/posts", post(create_post))
        .route("/threads/user/{id}", get(list_user_threads))
        .route("/threads/{id}", delete(delete_thread))
        .route("/posts/user/{id}", get(list_user_posts))
        .route("/posts/{id}", delete(delete_post))
        .route("/thread/{id}/posts", get(list_thread_posts));

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_export))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-user-id"),
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}
