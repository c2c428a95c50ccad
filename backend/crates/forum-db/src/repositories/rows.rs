use crate::{DbError, Result};

use forum_core::{Post, Thread, User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct ThreadRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub create_at: DateTime<Utc>,
    pub user_id: i64,
}

impl From<ThreadRow> for Thread {
    fn from(row: ThreadRow) -> Self {
        Thread {
            id: row.id,
            title: row.title,
            content: row.content,
            create_at: row.create_at,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PostRow {
    pub id: i64,
    pub content: String,
    pub create_at: DateTime<Utc>,
    pub thread_id: i64,
    pub user_id: i64,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            content: row.content,
            create_at: row.create_at,
            thread_id: row.thread_id,
            user_id: row.user_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRow {
    #[track_caller]
    pub(crate) fn into_user(self) -> Result<User> {
        let role = UserRole::from_str(&self.role).map_err(|e| DbError::Decode {
            table: "users",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        })
    }
}
