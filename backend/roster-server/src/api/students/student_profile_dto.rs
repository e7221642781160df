use crate::CredentialDto;

use roster_core::StudentProfile;

use serde::Serialize;

/// Profile view DTO: account fields plus raw credential records
#[derive(Debug, Serialize)]
pub struct StudentProfileDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: i64,
    pub credentials: Vec<CredentialDto>,
}

impl From<StudentProfile> for StudentProfileDto {
    fn from(p: StudentProfile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            email: p.email,
            phone: p.phone,
            role: p.role,
            created_at: p.created_at.timestamp(),
            credentials: p.credentials.into_iter().map(CredentialDto::from).collect(),
        }
    }
}
