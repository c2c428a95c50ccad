use crate::api::path_id::parse_id;
use crate::{ApiResult, AppState};

use forum_chat::ChatMessage;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v2/thread/{id}/chat
///
/// The chat history a live connection to the thread would replay
pub async fn list_chat_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ChatMessage>>> {
    let thread_id = parse_id(&id, "id")?;

    let messages = state
        .chat
        .use_case
        .list_messages_for_thread(thread_id)
        .await?;

    Ok(Json(messages))
}
