//! Post REST API handlers

use crate::api::path_id::parse_id;
use crate::{ApiError, ApiResult, AppState, AuthUser, CreatePostRequest, DeleteResponse};

use forum_chat::ChatMessage;
use forum_core::{NewPost, Post};
use forum_db::{PostRepository, ThreadRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;

/// POST /api/v2/threads/posts
///
/// Stores the post and links it into the thread's chat history. Live chat
/// connections see it on their next replay, not as a broadcast.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<Json<ChatMessage>> {
    ThreadRepository::new(state.pool.clone())
        .find_by_id(request.thread_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread", request.thread_id))?;

    let post = state
        .chat
        .use_case
        .create_message(NewPost::new(request.content, request.thread_id, user_id))
        .await?;

    info!(
        "User {} created post {:?} in thread {}",
        user_id, post.id, post.thread_id
    );

    Ok(Json(post))
}

/// GET /api/v2/thread/{id}/posts
pub async fn list_thread_posts(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    let thread_id = parse_id(&id, "id")?;

    let posts = PostRepository::new(state.pool.clone())
        .list_by_thread(thread_id)
        .await?;

    Ok(Json(posts))
}

/// GET /api/v2/posts/user/{id}
///
/// Only the caller's own posts may be listed
pub async fn list_user_posts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    let requested = parse_id(&id, "id")?;
    if requested != user_id {
        return Err(ApiError::forbidden(format!(
            "User {} may not list posts of user {}",
            user_id, requested
        )));
    }

    let posts = PostRepository::new(state.pool.clone())
        .list_by_user(user_id)
        .await?;

    Ok(Json(posts))
}

/// DELETE /api/v2/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let post_id = parse_id(&id, "id")?;

    let repo = PostRepository::new(state.pool.clone());
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post", post_id))?;

    if !UserRepository::new(state.pool.clone())
        .can_modify(post.user_id, user_id)
        .await?
    {
        return Err(ApiError::forbidden(format!(
            "User {} may not delete post {}",
            user_id, post_id
        )));
    }

    if !repo.delete(post_id).await? {
        return Err(ApiError::not_found("Post", post_id));
    }

    info!("User {} deleted post {}", user_id, post_id);

    Ok(Json(DeleteResponse { deleted_id: post_id }))
}
