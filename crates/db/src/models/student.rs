//! Student entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use task_tracker_core::types::DbId;
use validator::Validate;

/// A row from the `student` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    #[serde(rename = "StudentID")]
    pub student_id: DbId,
    #[serde(rename = "StudentName")]
    pub student_name: String,
    #[serde(rename = "StudentCohort")]
    pub student_cohort: String,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[serde(rename = "StudentName")]
    #[validate(length(min = 1, max = 255, message = "StudentName must be 1-255 characters"))]
    pub student_name: String,
    #[serde(rename = "StudentCohort")]
    #[validate(length(min = 1, max = 100, message = "StudentCohort must be 1-100 characters"))]
    pub student_cohort: String,
}

/// DTO for updating an existing student. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[serde(rename = "StudentName", default)]
    #[validate(length(min = 1, max = 255, message = "StudentName must be 1-255 characters"))]
    pub student_name: Option<String>,
    #[serde(rename = "StudentCohort", default)]
    #[validate(length(min = 1, max = 100, message = "StudentCohort must be 1-100 characters"))]
    pub student_cohort: Option<String>,
}
