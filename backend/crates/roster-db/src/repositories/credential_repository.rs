//! Read-only queries against the credentials table.

use crate::{DbError, Result as DbErrorResult};

use roster_core::CredentialRecord;

use chrono::DateTime;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: String,
    student_id: String,
    skills_acquired: Option<String>,
    score: f64,
    rank: String,
    credential_name: String,
    certificate_url: String,
    created_at: i64,
}

impl CredentialRow {
    fn into_record(self) -> DbErrorResult<CredentialRecord> {
        Ok(CredentialRecord {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("Invalid UUID in credentials.id: {}", e)))?,
            student_id: Uuid::parse_str(&self.student_id).map_err(|e| {
                DbError::decode(format!("Invalid UUID in credentials.student_id: {}", e))
            })?,
            skills_acquired: self.skills_acquired,
            score: self.score,
            rank: self.rank,
            credential_name: self.credential_name,
            certificate_url: self.certificate_url,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("Invalid timestamp in credentials.created_at"))?,
        })
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, student_id, skills_acquired, score, rank, credential_name, \
     certificate_url, created_at FROM credentials";

pub struct CredentialRepository {
    pool: SqlitePool,
}

impl CredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every credential owned by any of the given accounts
    /// (membership filter for roster aggregation).
    ///
    /// An empty id list short-circuits to an empty result without touching
    /// the database; `IN ()` is not valid SQL.
    pub async fn find_by_student_ids(
        &self,
        student_ids: &[Uuid],
    ) -> DbErrorResult<Vec<CredentialRecord>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_COLUMNS);
        query.push(" WHERE student_id IN (");
        let mut ids = query.separated(", ");
        for id in student_ids {
            ids.push_bind(id.to_string());
        }
        query.push(")");

        let rows: Vec<CredentialRow> = query.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(CredentialRow::into_record)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Fetch every credential owned by one account, in source order
    /// (no ORDER BY on purpose: the profile view preserves the order the
    /// backend returns).
    pub async fn find_by_student(&self, student_id: Uuid) -> DbErrorResult<Vec<CredentialRecord>> {
        let id_str = student_id.to_string();

        let sql = format!("{} WHERE student_id = ?", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, CredentialRow>(&sql)
            .bind(id_str)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(CredentialRow::into_record)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
