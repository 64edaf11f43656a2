//! Handlers for the `/quests` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use task_tracker_core::error::CoreError;
use task_tracker_core::types::DbId;
use task_tracker_db::models::quest::{CreateQuest, UpdateQuest};
use task_tracker_db::repositories::{MissionRepo, QuestRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, QuestCreated};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Quest", id })
}

/// POST /quests
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let quest = QuestRepo::create(&state.pool, &input).await?;
    tracing::info!(quest_id = quest.quest_id, "Quest created");

    Ok((
        StatusCode::CREATED,
        Json(QuestCreated {
            quest_id: quest.quest_id,
        }),
    ))
}

/// GET /quests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let quest = QuestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(quest))
}

/// PUT /quests/{id}
///
/// Only fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateQuest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    QuestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(MessageResponse::new("quest updated")))
}

/// DELETE /quests/{id}
///
/// Refused with 409 while missions still belong to the quest.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    if !QuestRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let missions = MissionRepo::count_by_quest(&state.pool, id).await?;
    if missions > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Quest {id} still has {missions} mission(s)"
        ))));
    }

    if !QuestRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(quest_id = id, "Quest deleted");

    Ok(Json(MessageResponse::new("quest deleted")))
}

/// GET /quests/{id}/missions
pub async fn list_missions(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    if !QuestRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let missions = MissionRepo::list_by_quest(&state.pool, id).await?;
    Ok(Json(missions))
}
