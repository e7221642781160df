use crate::StudentProfileDto;
use serde::Serialize;

/// Single student profile response
#[derive(Debug, Serialize)]
pub struct StudentProfileResponse {
    pub student: StudentProfileDto,
}
