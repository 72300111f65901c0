// src/store/assessments.rs

use sqlx::{SqlitePool, types::Json};

use crate::models::assessment::{Assessment, StoredAssessment};

/// Whether `upsert` created a new row or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created(i64),
    Updated(i64),
}

impl Saved {
    pub fn id(self) -> i64 {
        match self {
            Saved::Created(id) | Saved::Updated(id) => id,
        }
    }
}

/// Inserts the assessment, or updates the row with the same title and description.
pub async fn upsert(pool: &SqlitePool, assessment: &Assessment) -> Result<Saved, sqlx::Error> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM assessments WHERE title = ? AND description = ?")
            .bind(&assessment.title)
            .bind(&assessment.description)
            .fetch_optional(pool)
            .await?;

    if let Some(id) = existing {
        sqlx::query(
            r#"
            UPDATE assessments
            SET time_limit = ?, shuffle_questions = ?, section = ?, questions = ?
            WHERE id = ?
            "#,
        )
        .bind(assessment.time_limit)
        .bind(assessment.shuffle_questions)
        .bind(&assessment.section)
        .bind(Json(&assessment.questions))
        .bind(id)
        .execute(pool)
        .await?;

        return Ok(Saved::Updated(id));
    }

    let id = sqlx::query(
        r#"
        INSERT INTO assessments (title, description, time_limit, shuffle_questions, section, questions)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&assessment.title)
    .bind(&assessment.description)
    .bind(assessment.time_limit)
    .bind(assessment.shuffle_questions)
    .bind(&assessment.section)
    .bind(Json(&assessment.questions))
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(Saved::Created(id))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<StoredAssessment>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, title, description, time_limit, section, shuffle_questions, questions
        FROM assessments
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<StoredAssessment>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, title, description, time_limit, section, shuffle_questions, questions
        FROM assessments
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no row had that id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assessments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assessments").execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM assessments")
        .fetch_one(pool)
        .await
}

/// Appends a row to the distribution history.
pub async fn record_distribution(
    pool: &SqlitePool,
    assessment: &Assessment,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO distributed_assessments
        (assessment_id, title, description, time_limit, shuffle_questions, section, questions, distributed_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(assessment.id)
    .bind(&assessment.title)
    .bind(&assessment.description)
    .bind(assessment.time_limit)
    .bind(assessment.shuffle_questions)
    .bind(&assessment.section)
    .bind(Json(&assessment.questions))
    .bind(chrono::Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
