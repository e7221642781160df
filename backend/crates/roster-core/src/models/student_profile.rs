//! Student profile - profile-view projection of an account plus raw credentials.

use crate::{CredentialRecord, StudentAccount};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-memory projection used only by the profile view: account fields plus the
/// account's credential records in source order, skill fields left as the
/// original free-text strings. The profile intentionally differs from the
/// roster's normalized view because it renders one achievement per credential,
/// not a flattened skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub credentials: Vec<CredentialRecord>,
}

impl StudentProfile {
    /// Assemble a profile from the fetched account and its credentials,
    /// verbatim.
    pub fn from_parts(account: StudentAccount, credentials: Vec<CredentialRecord>) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            phone: account.phone,
            role: account.role,
            created_at: account.created_at,
            credentials,
        }
    }
}
