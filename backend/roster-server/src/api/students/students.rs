//! Student roster and profile handlers.
//!
//! Both endpoints run the two-step dependent fetch (accounts, then
//! credentials keyed by the account identifiers) and track it with
//! [`FetchPhase`] so a failure log names the step that aborted.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::{AppState, RosterResponse, StudentProfileResponse};

use roster_core::{FetchPhase, StudentProfile, aggregate_roster};
use roster_db::{AccountRepository, CredentialRepository, DbError};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

use super::list_students_query::ListStudentsQuery;
use super::student_dto::StudentDto;
use super::student_profile_dto::StudentProfileDto;

/// GET /api/v1/students
///
/// Returns the aggregated roster, optionally narrowed by `search` and
/// `skills` query parameters, plus the global skill vocabulary. The
/// vocabulary is always computed from the full credential set so filter
/// chips stay stable while a filter is active.
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> ApiResult<Json<RosterResponse>> {
    let accounts_repo = AccountRepository::new(state.pool.clone());
    let credentials_repo = CredentialRepository::new(state.pool.clone());

    let mut phase = FetchPhase::Idle.next();

    let accounts = accounts_repo
        .find_students()
        .await
        .map_err(|e| abort(&mut phase, e))?;
    phase = phase.next();

    let student_ids: Vec<Uuid> = accounts.iter().map(|account| account.id).collect();
    let credentials = credentials_repo
        .find_by_student_ids(&student_ids)
        .await
        .map_err(|e| abort(&mut phase, e))?;
    phase = phase.next();
    log::debug!("roster fetch {}: {} accounts", phase, accounts.len());

    let roster = aggregate_roster(accounts, &credentials);

    let filter = query.filter();
    let students = roster
        .students
        .into_iter()
        .filter(|student| filter.matches(student))
        .map(StudentDto::from)
        .collect();

    Ok(Json(RosterResponse {
        students,
        available_skills: roster.available_skills,
    }))
}

/// GET /api/v1/students/{id}
///
/// Returns one student profile with its raw credential records. A missing
/// or non-student account is a 404, distinct from transport failures.
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StudentProfileResponse>> {
    let student_id = Uuid::parse_str(&id)?;

    let accounts_repo = AccountRepository::new(state.pool.clone());
    let credentials_repo = CredentialRepository::new(state.pool.clone());

    let mut phase = FetchPhase::Idle.next();

    let account = accounts_repo
        .find_student_by_id(student_id)
        .await
        .map_err(|e| abort(&mut phase, e))?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Student {} not found", student_id),
            location: ErrorLocation::from(Location::caller()),
        })?;
    phase = phase.next();

    let credentials = credentials_repo
        .find_by_student(student_id)
        .await
        .map_err(|e| abort(&mut phase, e))?;
    phase = phase.next();
    log::debug!("profile fetch {}: student {}", phase, student_id);

    let profile = StudentProfile::from_parts(account, credentials);

    Ok(Json(StudentProfileResponse {
        student: StudentProfileDto::from(profile),
    }))
}

/// Mark the pipeline failed and report which phase the fetch aborted in.
fn abort(phase: &mut FetchPhase, e: DbError) -> ApiError {
    log::warn!("fetch aborted during {}: {}", phase, e);
    *phase = phase.fail();
    ApiError::from(e)
}
