// src/models/result.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, types::Json};
use validator::Validate;

/// Represents the 'assessment_results' table in the database.
/// At most one row per (student_number, assessment_id) is intended; only the
/// eligibility check guards it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: i64,
    pub assessment_id: i64,
    pub student_number: String,

    /// Snapshot of the assessment as it was taken.
    pub assessment: Json<Value>,

    pub answers: Json<Value>,

    /// Seconds.
    pub time_taken: i64,
    pub total_points: f64,
    pub mistakes: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A result joined with the student's name and the assessment title,
/// as shown on the results page.
#[derive(Debug, Serialize, FromRow)]
pub struct ResultSummary {
    pub id: i64,
    pub assessment_id: i64,
    pub assessment_title: Option<String>,
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time_taken: i64,
    pub total_points: f64,
    pub mistakes: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a finished assessment.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitResultRequest {
    pub assessment_id: i64,

    #[validate(length(min = 1, max = 32))]
    pub student_number: String,

    /// Client-side copy of the assessment. Loaded from the store when absent.
    #[serde(default)]
    pub assessment: Option<Value>,

    pub answers: Value,

    #[validate(range(min = 0))]
    pub time_taken: i64,

    pub total_points: f64,

    #[validate(range(min = 0))]
    pub mistakes: i64,
}

/// DTO for the eligibility check done before a student starts an assessment.
#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    pub student_number: String,
    pub assessment_id: i64,
}
