// src/store/results.rs

use serde_json::Value;
use sqlx::{SqlitePool, types::Json};

use crate::models::result::{AssessmentResult, ResultSummary, SubmitResultRequest};

/// Persists a submission together with the assessment snapshot it was taken against.
pub async fn insert(
    pool: &SqlitePool,
    submission: &SubmitResultRequest,
    snapshot: &Value,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO assessment_results
        (assessment_id, student_number, assessment, answers, time_taken, total_points, mistakes, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(submission.assessment_id)
    .bind(&submission.student_number)
    .bind(Json(snapshot))
    .bind(Json(&submission.answers))
    .bind(submission.time_taken)
    .bind(submission.total_points)
    .bind(submission.mistakes)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn exists_for(
    pool: &SqlitePool,
    student_number: &str,
    assessment_id: i64,
) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar(
        "SELECT 1 FROM assessment_results WHERE student_number = ? AND assessment_id = ? LIMIT 1",
    )
    .bind(student_number)
    .bind(assessment_id)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<AssessmentResult>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, assessment_id, student_number, assessment, answers,
               time_taken, total_points, mistakes, created_at
        FROM assessment_results
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Newest first, with student names and assessment titles where they still exist.
pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<ResultSummary>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            r.id,
            r.assessment_id,
            a.title AS assessment_title,
            r.student_number,
            s.first_name,
            s.last_name,
            r.time_taken,
            r.total_points,
            r.mistakes,
            r.created_at
        FROM assessment_results r
        LEFT JOIN students s ON s.student_number = r.student_number
        LEFT JOIN assessments a ON a.id = r.assessment_id
        ORDER BY r.created_at DESC, r.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM assessment_results")
        .fetch_one(pool)
        .await
}
