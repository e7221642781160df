pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    students::{
        credential_dto::CredentialDto,
        list_students_query::ListStudentsQuery,
        roster_response::RosterResponse,
        student_dto::StudentDto,
        student_profile_dto::StudentProfileDto,
        student_profile_response::StudentProfileResponse,
        students::{get_student, list_students},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
