//! Shared fixtures for handler tests.

use crate::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/roster-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Inserts an account row with the given role
pub async fn create_test_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    phone: Option<&str>,
    role: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO users (id, name, email, phone, role, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test account");

    id
}

/// Inserts a credential row owned by the given account
pub async fn create_test_credential(
    pool: &SqlitePool,
    student_id: Uuid,
    credential_name: &str,
    skills_acquired: Option<&str>,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO credentials (
                id, student_id, skills_acquired, score, rank,
                credential_name, certificate_url, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(student_id.to_string())
    .bind(skills_acquired)
    .bind(92.5)
    .bind("Gold")
    .bind(credential_name)
    .bind(format!("https://certs.test.local/{}", id))
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test credential");

    id
}
