//! Mission entity model and DTOs.
//!
//! A mission belongs to exactly one quest and one student. The due date is a
//! plain calendar date, carried as `YYYY-MM-DD` on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use task_tracker_core::dates::ymd;
use task_tracker_core::types::DbId;
use validator::Validate;

/// A row from the `missions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Mission {
    #[serde(rename = "MissionID")]
    pub mission_id: DbId,
    #[serde(rename = "QuestID")]
    pub quest_id: DbId,
    #[serde(rename = "StudentID")]
    pub student_id: DbId,
    #[serde(rename = "MissionTitle")]
    pub mission_title: String,
    #[serde(rename = "MissionDescription")]
    pub mission_description: String,
    #[serde(rename = "MissionDueDate", serialize_with = "ymd::serialize")]
    pub mission_due_date: NaiveDate,
}

/// DTO for creating a new mission. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMission {
    #[serde(rename = "QuestID")]
    pub quest_id: DbId,
    #[serde(rename = "StudentID")]
    pub student_id: DbId,
    #[serde(rename = "MissionTitle")]
    #[validate(length(min = 1, max = 255, message = "MissionTitle must be 1-255 characters"))]
    pub mission_title: String,
    #[serde(rename = "MissionDescription")]
    pub mission_description: String,
    #[serde(rename = "MissionDueDate", deserialize_with = "ymd::deserialize")]
    pub mission_due_date: NaiveDate,
}

/// DTO for updating an existing mission. All fields optional; a present
/// `MissionDueDate` must still be a valid `YYYY-MM-DD` date.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMission {
    #[serde(rename = "QuestID", default)]
    pub quest_id: Option<DbId>,
    #[serde(rename = "StudentID", default)]
    pub student_id: Option<DbId>,
    #[serde(rename = "MissionTitle", default)]
    #[validate(length(min = 1, max = 255, message = "MissionTitle must be 1-255 characters"))]
    pub mission_title: Option<String>,
    #[serde(rename = "MissionDescription", default)]
    pub mission_description: Option<String>,
    #[serde(
        rename = "MissionDueDate",
        default,
        deserialize_with = "ymd::deserialize_option"
    )]
    pub mission_due_date: Option<NaiveDate>,
}
