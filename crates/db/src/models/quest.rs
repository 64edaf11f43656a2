//! Quest entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use task_tracker_core::types::DbId;
use validator::Validate;

/// A row from the `quests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Quest {
    #[serde(rename = "QuestID")]
    pub quest_id: DbId,
    #[serde(rename = "QuestTitle")]
    pub quest_title: String,
    #[serde(rename = "QuestDescription")]
    pub quest_description: String,
}

/// DTO for creating a new quest. Both fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuest {
    #[serde(rename = "QuestTitle")]
    #[validate(length(min = 1, max = 255, message = "QuestTitle must be 1-255 characters"))]
    pub quest_title: String,
    #[serde(rename = "QuestDescription")]
    pub quest_description: String,
}

/// DTO for updating an existing quest. Absent or `null` fields are left as-is.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuest {
    #[serde(rename = "QuestTitle", default)]
    #[validate(length(min = 1, max = 255, message = "QuestTitle must be 1-255 characters"))]
    pub quest_title: Option<String>,
    #[serde(rename = "QuestDescription", default)]
    pub quest_description: Option<String>,
}
