pub mod credential_dto;
pub mod list_students_query;
pub mod roster_response;
pub mod student_dto;
pub mod student_profile_dto;
pub mod student_profile_response;
pub mod students;
