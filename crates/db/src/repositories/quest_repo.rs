//! Repository for the `quests` table.

use sqlx::PgPool;
use task_tracker_core::types::DbId;

use crate::models::quest::{CreateQuest, Quest, UpdateQuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "quest_id, quest_title, quest_description";

/// Provides CRUD operations for quests.
pub struct QuestRepo;

impl QuestRepo {
    /// Insert a new quest, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuest) -> Result<Quest, sqlx::Error> {
        let query = format!(
            "INSERT INTO quests (quest_title, quest_description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(&input.quest_title)
            .bind(&input.quest_description)
            .fetch_one(pool)
            .await
    }

    /// Find a quest by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE quest_id = $1");
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a quest with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM quests WHERE quest_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a quest. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuest,
    ) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!(
            "UPDATE quests SET \
                quest_title = COALESCE($2, quest_title), \
                quest_description = COALESCE($3, quest_description) \
             WHERE quest_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .bind(&input.quest_title)
            .bind(&input.quest_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a quest. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while missions still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quests WHERE quest_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
