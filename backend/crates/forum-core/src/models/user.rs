use crate::UserRole;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Admins may modify any record, everyone else only their own.
    pub fn can_modify(&self, owner_id: i64) -> bool {
        self.role == UserRole::Admin || self.id == owner_id
    }
}
