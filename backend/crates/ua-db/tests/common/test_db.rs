use ua_config::DatabaseConfig;
use ua_core::{NewUser, validate_user};

use sqlx::PgPool;

/// Connects to the database named by `DATABASE_URL`, runs migrations and
/// empties the `users` table (resetting the id sequence).
pub async fn create_test_pool() -> PgPool {
    let config = DatabaseConfig {
        url: Some(
            std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must point at a disposable PostgreSQL database"),
        ),
        max_connections: 2,
        ..Default::default()
    };

    let pool = ua_db::connect(&config)
        .await
        .expect("Failed to connect to test database");

    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("TRUNCATE TABLE users RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to reset users table");

    pool
}

pub fn new_user(name: &str, dob: &str) -> NewUser {
    validate_user(Some(name), Some(dob)).expect("test input must be valid")
}
