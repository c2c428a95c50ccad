//! Thread REST API handlers

use crate::api::path_id::parse_id;
use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateThreadRequest, DeleteResponse,
    UpdateThreadResponse,
};

use forum_core::{NewThread, Thread, ThreadUpdate};
use forum_db::{ThreadRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;

/// GET /api/v2/threads
///
/// All threads, newest first
pub async fn list_threads(State(state): State<AppState>) -> ApiResult<Json<Vec<Thread>>> {
    let threads = ThreadRepository::new(state.pool.clone()).list_all().await?;

    Ok(Json(threads))
}

/// GET /api/v2/thread/{id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Thread>> {
    let thread_id = parse_id(&id, "id")?;

    let thread = ThreadRepository::new(state.pool.clone())
        .find_by_id(thread_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread", thread_id))?;

    Ok(Json(thread))
}

/// POST /api/v2/threads
pub async fn create_thread(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateThreadRequest>,
) -> ApiResult<Json<Thread>> {
    state
        .validator
        .validate_thread(&request.title, &request.content)?;

    let thread = ThreadRepository::new(state.pool.clone())
        .create(&NewThread::new(request.title, request.content, user_id))
        .await?;

    info!("User {} created thread {}", user_id, thread.id);

    Ok(Json(thread))
}

/// GET /api/v2/threads/user/{id}
///
/// Only the caller's own threads may be listed
pub async fn list_user_threads(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Thread>>> {
    let requested = parse_id(&id, "id")?;
    if requested != user_id {
        return Err(ApiError::forbidden(format!(
            "User {} may not list threads of user {}",
            user_id, requested
        )));
    }

    let threads = ThreadRepository::new(state.pool.clone())
        .list_by_user(user_id)
        .await?;

    Ok(Json(threads))
}

/// PUT /api/v2/threads
///
/// Edits title and content; the creation time is kept
pub async fn update_thread(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(update): Json<ThreadUpdate>,
) -> ApiResult<Json<UpdateThreadResponse>> {
    let repo = ThreadRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(update.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread", update.id))?;

    if !UserRepository::new(state.pool.clone())
        .can_modify(existing.user_id, user_id)
        .await?
    {
        return Err(ApiError::forbidden(format!(
            "User {} may not edit thread {}",
            user_id, update.id
        )));
    }

    state
        .validator
        .validate_thread(&update.title, &update.content)?;

    if !repo.update(&update).await? {
        return Err(ApiError::not_found("Thread", update.id));
    }

    let thread = repo
        .find_by_id(update.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread", update.id))?;

    info!("User {} updated thread {}", user_id, thread.id);

    Ok(Json(UpdateThreadResponse {
        message: "Thread updated".to_string(),
        thread,
    }))
}

/// DELETE /api/v2/threads/{id}
///
/// Posts and chat history of the thread go with it
pub async fn delete_thread(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let thread_id = parse_id(&id, "id")?;

    let repo = ThreadRepository::new(state.pool.clone());
    let thread = repo
        .find_by_id(thread_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread", thread_id))?;

    if !UserRepository::new(state.pool.clone())
        .can_modify(thread.user_id, user_id)
        .await?
    {
        return Err(ApiError::forbidden(format!(
            "User {} may not delete thread {}",
            user_id, thread_id
        )));
    }

    if !repo.delete(thread_id).await? {
        return Err(ApiError::not_found("Thread", thread_id));
    }

    info!("User {} deleted thread {}", user_id, thread_id);

    Ok(Json(DeleteResponse {
        deleted_id: thread_id,
    }))
}
