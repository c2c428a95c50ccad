use crate::Result as DbErrorResult;
use crate::repositories::rows::ThreadRow;

use forum_core::{NewThread, Thread, ThreadUpdate};

use chrono::Utc;
use sqlx::SqlitePool;

const THREAD_COLUMNS: &str = "id, title, content, create_at, user_id";

#[derive(Clone)]
pub struct ThreadRepository {
    pool: SqlitePool,
}

impl ThreadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the thread stamped with the current time.
    pub async fn create(&self, thread: &NewThread) -> DbErrorResult<Thread> {
        let sql = format!(
            "INSERT INTO threads (title, content, create_at, user_id) \
             VALUES (?, ?, ?, ?) RETURNING {THREAD_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ThreadRow>(&sql)
            .bind(&thread.title)
            .bind(&thread.content)
            .bind(Utc::now())
            .bind(thread.user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Thread>> {
        let sql = format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = ?");

        let row = sqlx::query_as::<_, ThreadRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Thread::from))
    }

    /// Newest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Thread>> {
        let sql = format!("SELECT {THREAD_COLUMNS} FROM threads ORDER BY create_at DESC, id DESC");

        let rows = sqlx::query_as::<_, ThreadRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Thread::from).collect())
    }

    /// Newest first.
    pub async fn list_by_user(&self, user_id: i64) -> DbErrorResult<Vec<Thread>> {
        let sql = format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE user_id = ? \
             ORDER BY create_at DESC, id DESC"
        );

        let rows = sqlx::query_as::<_, ThreadRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Thread::from).collect())
    }

    /// Returns false when no thread has that id.
    pub async fn update(&self, update: &ThreadUpdate) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE threads SET title = ?, content = ? WHERE id = ?")
            .bind(&update.title)
            .bind(&update.content)
            .bind(update.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Posts and chat links go with the thread. Returns false when nothing was deleted.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
