use roster_core::CredentialRecord;

use serde::Serialize;

/// Achievement card DTO: one credential, skill field left as the original
/// unsplit free text.
#[derive(Debug, Serialize)]
pub struct CredentialDto {
    pub id: String,
    pub skills_acquired: Option<String>,
    pub score: f64,
    pub rank: String,
    pub credential_name: String,
    pub certificate_url: String,
    pub created_at: i64,
}

impl From<CredentialRecord> for CredentialDto {
    fn from(c: CredentialRecord) -> Self {
        Self {
            id: c.id.to_string(),
            skills_acquired: c.skills_acquired,
            score: c.score,
            rank: c.rank,
            credential_name: c.credential_name,
            certificate_url: c.certificate_url,
            created_at: c.created_at.timestamp(),
        }
    }
}
