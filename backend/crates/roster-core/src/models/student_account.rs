//! Student account - backend record for one user with a role tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role tag for accounts in scope of the roster and profile views.
pub const STUDENT_ROLE: &str = "student";

/// An account row from the external system of record.
/// Only `student`-role accounts are surfaced by the views; the role stays a
/// free string because the external schema does not guarantee an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl StudentAccount {
    pub fn is_student(&self) -> bool {
        self.role == STUDENT_ROLE
    }
}
