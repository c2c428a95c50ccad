use crate::Result as DbErrorResult;
use crate::repositories::rows::PostRow;

use forum_core::{NewPost, Post};

use sqlx::SqlitePool;

const POST_COLUMNS: &str = "id, content, create_at, thread_id, user_id";

#[derive(Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails if the thread does not exist.
    pub async fn create(&self, post: &NewPost) -> DbErrorResult<Post> {
        let sql = format!(
            "INSERT INTO posts (content, create_at, thread_id, user_id) \
             VALUES (?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(&post.content)
            .bind(post.create_at)
            .bind(post.thread_id)
            .bind(post.user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?");

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Post::from))
    }

    /// Oldest first, the order a discussion is read in.
    pub async fn list_by_thread(&self, thread_id: i64) -> DbErrorResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE thread_id = ? ORDER BY create_at ASC, id ASC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(thread_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Newest first.
    pub async fn list_by_user(&self, user_id: i64) -> DbErrorResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = ? ORDER BY create_at DESC, id DESC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Returns false when nothing was deleted.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
