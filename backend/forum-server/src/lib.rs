pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    chat::chat::list_chat_messages,
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::{AuthUser, USER_ID_HEADER},
    posts::{
        create_post_request::CreatePostRequest,
        posts::{create_post, delete_post, list_thread_posts, list_user_posts},
    },
    threads::{
        create_thread_request::CreateThreadRequest,
        threads::{
            create_thread, delete_thread, get_thread, list_threads, list_user_threads,
            update_thread,
        },
        update_thread_response::UpdateThreadResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
