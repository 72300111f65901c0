// src/handlers/students.rs

use axum::{extract::State, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    eligibility,
    error::AppError,
    extract::AppJson,
    models::{
        assessment::Assessment,
        restriction::DetectedActivityRequest,
        result::{EligibilityRequest, SubmitResultRequest},
        student::{DeleteStudentRequest, EditStudentRequest, LoginRequest, RegisterStudentRequest},
    },
    registry::{ActivityOutcome, RestrictionRegistry},
    response::Envelope,
    store,
    utils::password::{hash_password, verify_password},
};

/// Registers a new student.
///
/// Hashes the password using Argon2 before storing it.
pub async fn register(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<RegisterStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let hashed_password = hash_password(&payload.password)?;

    store::students::insert(&pool, &payload, &hashed_password)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Student already exists!".to_string())
            }
            e => {
                tracing::error!("Failed to register student: {:?}", e);
                AppError::from(e)
            }
        })?;

    tracing::info!(student_number = %payload.student_number, "Student registered");
    Ok(Envelope::success("Student registered!"))
}

/// Verifies a student's credentials and returns their record.
pub async fn login(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let student = store::students::find(&pool, &payload.student_number)
        .await?
        .ok_or(AppError::NotFound("Student not found!".to_string()))?;

    if !verify_password(&payload.password, &student.password)? {
        tracing::warn!(student_number = %student.student_number, "Login with wrong password");
        return Err(AppError::AuthError("Invalid password!".to_string()));
    }

    Ok(Envelope::success("Login successful!").with("student", student))
}

/// Stores a finished attempt.
///
/// Keeps the client's copy of the assessment when one is sent, otherwise
/// snapshots the stored assessment.
pub async fn submit(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<SubmitResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let snapshot = match &payload.assessment {
        Some(snapshot) => snapshot.clone(),
        None => {
            let stored = store::assessments::get(&pool, payload.assessment_id)
                .await?
                .ok_or(AppError::NotFound("Assessment not found!".to_string()))?;
            serde_json::to_value(Assessment::from(stored))?
        }
    };

    let id = store::results::insert(&pool, &payload, &snapshot).await.map_err(|e| {
        tracing::error!("Failed to store result: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(
        result_id = id,
        assessment_id = payload.assessment_id,
        student_number = %payload.student_number,
        total_points = payload.total_points,
        "Assessment submitted"
    );
    Ok(Envelope::success("Assessment submitted!").with("result_id", id))
}

pub async fn check_eligibility(
    State(pool): State<SqlitePool>,
    State(restrictions): State<RestrictionRegistry>,
    AppJson(payload): AppJson<EligibilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let verdict = eligibility::check(
        &pool,
        &restrictions,
        &payload.student_number,
        payload.assessment_id,
    )
    .await?;

    let envelope = if verdict.is_eligible() {
        Envelope::success(verdict.message())
    } else {
        Envelope::error(verdict.message())
    };

    Ok(envelope.with("eligible", verdict.is_eligible()))
}

/// Receives monitoring reports. `minimized` and `cheating` restrict the
/// student from the assessment; anything else is only logged.
///
/// A report without a name takes it from the student's record when there is one.
pub async fn activity_detected(
    State(pool): State<SqlitePool>,
    State(restrictions): State<RestrictionRegistry>,
    AppJson(payload): AppJson<DetectedActivityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let student_name = if payload.student_name.is_empty() {
        store::students::find(&pool, &payload.student_number)
            .await?
            .map(|student| student.full_name())
            .unwrap_or_default()
    } else {
        payload.student_name.clone()
    };

    let outcome = restrictions.report_activity(
        &payload.student_number,
        payload.assessment_id,
        &payload.activity,
        &student_name,
    );

    let envelope = match outcome {
        ActivityOutcome::Restricted => {
            tracing::info!(
                student_number = %payload.student_number,
                assessment_id = payload.assessment_id,
                activity = %payload.activity,
                "Student restricted"
            );
            Envelope::success("Student restricted!").with("restricted", true)
        }
        ActivityOutcome::Logged => {
            tracing::debug!(
                student_number = %payload.student_number,
                assessment_id = payload.assessment_id,
                activity = %payload.activity,
                "Activity logged"
            );
            Envelope::success("Activity logged").with("restricted", false)
        }
    };
    Ok(envelope)
}

pub async fn delete_student(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<DeleteStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !store::students::delete(&pool, &payload.student_number).await? {
        return Err(AppError::NotFound("Student not found!".to_string()));
    }

    tracing::info!(student_number = %payload.student_number, "Student deleted");
    Ok(Envelope::success("Student deleted!"))
}

/// Updates the fields present in the request. A new password is re-hashed.
pub async fn edit_student(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<EditStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()?;

    if !store::students::update(&pool, &payload, password_hash.as_deref()).await? {
        return Err(AppError::NotFound("Student not found!".to_string()));
    }

    if !payload.is_empty() {
        tracing::info!(student_number = %payload.student_number, "Student updated");
    }
    Ok(Envelope::success("Student updated!"))
}
