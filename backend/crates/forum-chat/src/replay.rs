use crate::{ChatUseCase, ConnectionId, HubHandle, Result as ChatErrorResult};

use std::sync::Arc;

/// Loads the thread's chat history and hands it to the hub for one connection.
///
/// Returns the number of messages the hub enqueued, which is smaller than
/// the history when the connection overflowed or left in the meantime.
pub async fn replay_history(
    use_case: Arc<dyn ChatUseCase>,
    hub: HubHandle,
    connection_id: ConnectionId,
    thread_id: i64,
) -> ChatErrorResult<usize> {
    let messages = use_case.list_messages_for_thread(thread_id).await?;

    hub.replay(connection_id, messages).await
}
