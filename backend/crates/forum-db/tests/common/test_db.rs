use forum_core::UserRole;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    forum_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row and returns its id
pub async fn create_test_user(pool: &SqlitePool, name: &str, role: UserRole) -> i64 {
    let email = format!("{}@example.com", name);

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, role) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(&email)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .expect("Failed to create test user")
}
