// src/handlers/control.rs

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    extract::AppJson,
    models::{assessment::StopAssessmentRequest, restriction::UnrestrictParams},
    registry::{DistributionRegistry, RestrictionRegistry},
    response::Envelope,
};

/// Closes an ongoing assessment, matched by title and description.
pub async fn stop_assessment(
    State(distributions): State<DistributionRegistry>,
    AppJson(payload): AppJson<StopAssessmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let stopped = distributions
        .stop(&payload.into())
        .ok_or(AppError::NotFound("Assessment not found!".to_string()))?;

    tracing::info!(title = %stopped.title, section = %stopped.section, "Assessment stopped");
    Ok(Envelope::success("Assessment stopped!").with("assessment", stopped))
}

/// Lifts a student's restrictions.
///
/// Without `?assessment_id=` every restriction the student has is removed,
/// across all assessments.
pub async fn unrestrict_student(
    State(restrictions): State<RestrictionRegistry>,
    Path(student_number): Path<String>,
    Query(params): Query<UnrestrictParams>,
) -> Result<impl IntoResponse, AppError> {
    let removed = restrictions.unrestrict(&student_number, params.assessment_id);

    if removed == 0 {
        return Err(AppError::NotFound("Restricted student not found!".to_string()));
    }

    tracing::info!(
        student_number = %student_number,
        assessment_id = ?params.assessment_id,
        removed,
        "Student unrestricted"
    );
    Ok(Envelope::success("Student unrestricted!").with("removed", removed))
}
