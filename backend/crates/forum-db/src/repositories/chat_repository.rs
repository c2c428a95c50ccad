use crate::Result as DbErrorResult;
use crate::repositories::rows::PostRow;

use forum_core::{ChatLink, NewPost, Post};

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ChatRepository {
    pool: SqlitePool,
}

impl ChatRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn link(&self, link: &ChatLink) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO chat (thread_id, user_id, post_id) VALUES (?, ?, ?)")
            .bind(link.thread_id)
            .bind(link.user_id)
            .bind(link.post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Stores a post and links it into its thread's chat in one transaction.
    pub async fn create_linked_post(&self, post: &NewPost) -> DbErrorResult<Post> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PostRow>(
            r#"
              INSERT INTO posts (content, create_at, thread_id, user_id)
              VALUES (?, ?, ?, ?)
              RETURNING id, content, create_at, thread_id, user_id
              "#,
        )
        .bind(&post.content)
        .bind(post.create_at)
        .bind(post.thread_id)
        .bind(post.user_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO chat (thread_id, user_id, post_id) VALUES (?, ?, ?)")
            .bind(row.thread_id)
            .bind(row.user_id)
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    /// Chat history of a thread in persistence order (creation time, then id).
    pub async fn list_chat_posts(&self, thread_id: i64) -> DbErrorResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
              SELECT p.id, p.content, p.create_at, p.thread_id, p.user_id
              FROM posts p
              JOIN chat c ON p.id = c.post_id
              WHERE c.thread_id = ?
              ORDER BY p.create_at ASC, p.id ASC
              "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
