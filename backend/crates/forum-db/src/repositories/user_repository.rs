use crate::Result as DbErrorResult;
use crate::repositories::rows::UserRow;

use forum_core::User;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Whether `actor_id` may edit or delete a record owned by `owner_id`.
    ///
    /// Owners always may. Anyone else needs an admin row in `users`.
    pub async fn can_modify(&self, owner_id: i64, actor_id: i64) -> DbErrorResult<bool> {
        if owner_id == actor_id {
            return Ok(true);
        }

        Ok(self
            .find_by_id(actor_id)
            .await?
            .is_some_and(|actor| actor.can_modify(owner_id)))
    }
}
