//! Handlers for the `/students` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use task_tracker_core::error::CoreError;
use task_tracker_core::types::DbId;
use task_tracker_db::models::student::{CreateStudent, UpdateStudent};
use task_tracker_db::repositories::{MissionRepo, StudentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, StudentCreated};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// POST /students
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(student_id = student.student_id, "Student created");

    Ok((
        StatusCode::CREATED,
        Json(StudentCreated {
            student_id: student.student_id,
        }),
    ))
}

/// GET /students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// PUT /students/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateStudent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(MessageResponse::new("student updated")))
}

/// DELETE /students/{id}
///
/// Refused with 409 while missions are still assigned to the student.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    if !StudentRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let missions = MissionRepo::count_by_student(&state.pool, id).await?;
    if missions > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Student {id} still has {missions} mission(s)"
        ))));
    }

    if !StudentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(student_id = id, "Student deleted");

    Ok(Json(MessageResponse::new("student deleted")))
}

/// GET /students/{id}/missions
pub async fn list_missions(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    if !StudentRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let missions = MissionRepo::list_by_student(&state.pool, id).await?;
    Ok(Json(missions))
}
