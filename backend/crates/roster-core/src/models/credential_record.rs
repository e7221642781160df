//! Credential record - one issued certificate/achievement tied to an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A credential row from the external backend.
///
/// `skills_acquired` is a free-text field: sometimes a single skill name,
/// sometimes several joined by commas, never a true list in transit. The
/// normalizer in [`crate::skills`] owns turning it into tokens; this struct
/// keeps it raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: Uuid,
    /// Owning account (foreign key into the accounts table).
    pub student_id: Uuid,
    pub skills_acquired: Option<String>,
    pub score: f64,
    /// Free-text rank label (e.g. "Gold", "Top 5%").
    pub rank: String,
    pub credential_name: String,
    pub certificate_url: String,
    pub created_at: DateTime<Utc>,
}
