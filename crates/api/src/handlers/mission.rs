//! Handlers for the `/missions` resource.
//!
//! The body DTOs parse `MissionDueDate` strictly as `YYYY-MM-DD`, so a
//! malformed date never reaches the repository. Referenced quests and students
//! are looked up before writing and a missing one is reported as a validation
//! failure.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use task_tracker_core::error::CoreError;
use task_tracker_core::types::DbId;
use task_tracker_db::models::mission::{CreateMission, UpdateMission};
use task_tracker_db::repositories::{MissionRepo, QuestRepo, StudentRepo};
use task_tracker_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, MissionCreated};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Mission",
        id,
    })
}

/// Reject references to quests or students that do not exist.
async fn ensure_references(
    pool: &DbPool,
    quest_id: Option<DbId>,
    student_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(quest_id) = quest_id {
        if !QuestRepo::exists(pool, quest_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "QuestID {quest_id} does not reference an existing quest"
            ))));
        }
    }
    if let Some(student_id) = student_id {
        if !StudentRepo::exists(pool, student_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "StudentID {student_id} does not reference an existing student"
            ))));
        }
    }
    Ok(())
}

/// POST /missions
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;
    ensure_references(&state.pool, Some(input.quest_id), Some(input.student_id)).await?;

    let mission = MissionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        mission_id = mission.mission_id,
        quest_id = mission.quest_id,
        student_id = mission.student_id,
        "Mission created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MissionCreated {
            mission_id: mission.mission_id,
        }),
    ))
}

/// GET /missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let mission = MissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(mission))
}

/// PUT /missions/{id}
///
/// Only fields present in the body change. Moving a mission to another quest
/// or student requires the target to exist.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateMission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    if MissionRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    ensure_references(&state.pool, input.quest_id, input.student_id).await?;

    MissionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(MessageResponse::new("mission updated")))
}

/// DELETE /missions/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    if !MissionRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(mission_id = id, "Mission deleted");

    Ok(Json(MessageResponse::new("mission deleted")))
}
