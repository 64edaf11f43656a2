//! Repository for the `student` table.

use sqlx::PgPool;
use task_tracker_core::types::DbId;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

const COLUMNS: &str = "student_id, student_name, student_cohort";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO student (student_name, student_cohort) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_name)
            .bind(&input.student_cohort)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student WHERE student_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM student WHERE student_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a student. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE student SET \
                student_name = COALESCE($2, student_name), \
                student_cohort = COALESCE($3, student_cohort) \
             WHERE student_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.student_name)
            .bind(&input.student_cohort)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student WHERE student_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
