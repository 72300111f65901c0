// src/models/assessment.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{prelude::FromRow, types::Json};
use validator::{Validate, ValidationError};

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    ShortAnswer,
    TrueFalse,
    Ranking,
    Essay,
    LinearScale,
}

/// A single question inside an assessment.
/// Field names follow the camelCase used by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question"))]
pub struct Question {
    /// Scoped to the owning assessment.
    pub id: i64,

    #[validate(length(min = 1, max = 2000))]
    pub question: String,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Shape depends on the question type (indices, strings, booleans, orderings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<Vec<Value>>,

    pub required: bool,

    #[validate(range(min = 0.0))]
    pub points: f64,

    pub shuffle_options: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(default)]
    pub media: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_media_upload: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_scale_start: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_scale_end: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_scale_step: Option<f64>,
}

/// Linear-scale bounds must be ordered and the step positive.
fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.question_type != QuestionType::LinearScale {
        return Ok(());
    }
    if let (Some(start), Some(end)) = (question.linear_scale_start, question.linear_scale_end) {
        if start >= end {
            return Err(ValidationError::new("linear_scale_bounds_out_of_order"));
        }
    }
    if let Some(step) = question.linear_scale_step {
        if step <= 0.0 {
            return Err(ValidationError::new("linear_scale_step_not_positive"));
        }
    }
    Ok(())
}

/// Full assessment payload, as sent by instructors on save and distribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Assessment {
    /// Present once the assessment has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: String,

    /// Seconds. Informational only; the client enforces it.
    #[validate(range(min = 0))]
    pub time_limit: i64,

    #[validate(length(min = 1, max = 50))]
    pub section: String,

    pub shuffle_questions: bool,

    #[validate(nested)]
    pub questions: Vec<Question>,
}

impl Assessment {
    pub fn key(&self) -> AssessmentKey {
        AssessmentKey {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Natural key of an assessment. Stored assessments never share one,
/// and the ongoing list is keyed by it on both insertion and removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentKey {
    pub title: String,
    pub description: String,
}

impl AssessmentKey {
    pub fn matches(&self, assessment: &Assessment) -> bool {
        self.title == assessment.title && self.description == assessment.description
    }
}

/// Represents the 'assessments' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredAssessment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub time_limit: i64,
    pub section: String,
    pub shuffle_questions: bool,
    /// Stored as a JSON text blob.
    pub questions: Json<Vec<Question>>,
}

impl From<StoredAssessment> for Assessment {
    fn from(row: StoredAssessment) -> Self {
        Self {
            id: Some(row.id),
            title: row.title,
            description: row.description,
            time_limit: row.time_limit,
            section: row.section,
            shuffle_questions: row.shuffle_questions,
            questions: row.questions.0,
        }
    }
}

/// DTO for stopping an ongoing assessment.
#[derive(Debug, Deserialize)]
pub struct StopAssessmentRequest {
    pub title: String,
    pub description: String,
}

impl From<StopAssessmentRequest> for AssessmentKey {
    fn from(req: StopAssessmentRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}
