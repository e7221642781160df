use crate::StudentDto;
use serde::Serialize;

/// Roster view response: the (possibly filtered) student list plus the
/// global skill vocabulary for building filter chips.
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub students: Vec<StudentDto>,
    pub available_skills: Vec<String>,
}
