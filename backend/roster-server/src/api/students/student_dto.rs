use roster_core::EnrichedStudent;

use serde::Serialize;

/// Roster entry DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct StudentDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: i64,
    /// Deduplicated normalized skill tokens
    pub skills: Vec<String>,
}

impl From<EnrichedStudent> for StudentDto {
    fn from(s: EnrichedStudent) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            email: s.email,
            phone: s.phone,
            created_at: s.created_at.timestamp(),
            skills: s.skills,
        }
    }
}
