use habit_core::User;
use habit_db::{MIGRATOR, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user so habits can reference it
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = crate::common::test_user(email);
    UserRepository::create(pool, &user)
        .await
        .expect("Failed to create test user");
    user
}
