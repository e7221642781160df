//! Read-only queries against the accounts table.
//!
//! The accounts table belongs to the wider application; this repository only
//! ever selects `student`-role rows and never writes.

use crate::{DbError, Result as DbErrorResult};

use roster_core::{STUDENT_ROLE, StudentAccount};

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Raw row shape: UUIDs stored as TEXT, timestamps as unix seconds.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    role: String,
    created_at: i64,
}

impl AccountRow {
    fn into_account(self) -> DbErrorResult<StudentAccount> {
        Ok(StudentAccount {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("Invalid UUID in users.id: {}", e)))?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("Invalid timestamp in users.created_at"))?,
        })
    }
}

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every student-role account.
    pub async fn find_students(&self) -> DbErrorResult<Vec<StudentAccount>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, name, email, phone, role, created_at
                FROM users
                WHERE role = ?
            "#,
        )
        .bind(STUDENT_ROLE)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(AccountRow::into_account)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Fetch one student-role account by identifier.
    ///
    /// A missing row (or a row with a non-student role) is `Ok(None)`, a
    /// normal state the caller reports as not-found; only transport and
    /// decode failures are errors.
    pub async fn find_student_by_id(&self, id: Uuid) -> DbErrorResult<Option<StudentAccount>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, name, email, phone, role, created_at
                FROM users
                WHERE id = ? AND role = ?
            "#,
        )
        .bind(id_str)
        .bind(STUDENT_ROLE)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }
}
