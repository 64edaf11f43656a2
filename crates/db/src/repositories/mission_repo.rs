//! Repository for the `missions` table.
//!
//! Quest and student relationships are plain foreign key columns; the
//! `list_by_*` and `count_by_*` queries replace any implicit navigation.

use sqlx::PgPool;
use task_tracker_core::types::DbId;

use crate::models::mission::{CreateMission, Mission, UpdateMission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "mission_id, quest_id, student_id, mission_title, \
                       mission_description, mission_due_date";

/// Provides CRUD and relationship lookups for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions \
                (quest_id, student_id, mission_title, mission_description, mission_due_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(input.quest_id)
            .bind(input.student_id)
            .bind(&input.mission_title)
            .bind(&input.mission_description)
            .bind(input.mission_due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a mission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE mission_id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the missions of a quest, earliest due date first.
    pub async fn list_by_quest(pool: &PgPool, quest_id: DbId) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions WHERE quest_id = $1 \
             ORDER BY mission_due_date, mission_id"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(quest_id)
            .fetch_all(pool)
            .await
    }

    /// List the missions assigned to a student, earliest due date first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions WHERE student_id = $1 \
             ORDER BY mission_due_date, mission_id"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_quest(pool: &PgPool, quest_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM missions WHERE quest_id = $1")
            .bind(quest_id)
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_student(pool: &PgPool, student_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM missions WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(pool)
            .await
    }

    /// Update a mission. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMission,
    ) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!(
            "UPDATE missions SET \
                quest_id = COALESCE($2, quest_id), \
                student_id = COALESCE($3, student_id), \
                mission_title = COALESCE($4, mission_title), \
                mission_description = COALESCE($5, mission_description), \
                mission_due_date = COALESCE($6, mission_due_date) \
             WHERE mission_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .bind(input.quest_id)
            .bind(input.student_id)
            .bind(&input.mission_title)
            .bind(&input.mission_description)
            .bind(input.mission_due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM missions WHERE mission_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
