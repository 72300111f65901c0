// src/handlers/assessments.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    extract::AppJson,
    models::assessment::Assessment,
    registry::DistributionRegistry,
    response::Envelope,
    store::{self, assessments::Saved},
};

/// Saves an assessment, updating the stored one with the same title and
/// description instead of creating a duplicate.
pub async fn save_assessment(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<Assessment>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let saved = store::assessments::upsert(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to save assessment: {:?}", e);
        AppError::from(e)
    })?;

    let message = match saved {
        Saved::Created(_) => "Assessment saved!",
        Saved::Updated(_) => "Assessment updated!",
    };
    tracing::info!(id = saved.id(), title = %payload.title, "{}", message);

    Ok(Envelope::success(message)
        .with("id", saved.id())
        .with("created", matches!(saved, Saved::Created(_))))
}

pub async fn list_assessments(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let assessments: Vec<Assessment> = store::assessments::list(&pool)
        .await?
        .into_iter()
        .map(Assessment::from)
        .collect();

    Ok(Envelope::success("Assessments retrieved!").with("assessments", assessments))
}

pub async fn get_assessment(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let assessment = store::assessments::get(&pool, id)
        .await?
        .map(Assessment::from)
        .ok_or(AppError::NotFound("Assessment not found!".to_string()))?;

    Ok(Envelope::success("Assessment found!").with("assessment", assessment))
}

pub async fn delete_assessment(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !store::assessments::delete(&pool, id).await? {
        return Err(AppError::NotFound("Assessment not found!".to_string()));
    }

    tracing::info!(id, "Assessment deleted");
    Ok(Envelope::success("Assessment deleted!"))
}

/// Opens an assessment to students.
///
/// The in-memory entry is authoritative. The history row is best-effort: if
/// it fails the entry stays ongoing and the failure is only logged.
pub async fn distribute_assessment(
    State(pool): State<SqlitePool>,
    State(distributions): State<DistributionRegistry>,
    AppJson(payload): AppJson<Assessment>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !distributions.distribute(payload.clone()) {
        return Err(AppError::Conflict("Assessment is already ongoing!".to_string()));
    }
    tracing::info!(
        title = %payload.title,
        section = %payload.section,
        ongoing = distributions.len(),
        "Assessment distributed"
    );

    if let Err(e) = store::assessments::record_distribution(&pool, &payload).await {
        tracing::error!("Failed to record distribution of '{}': {:?}", payload.title, e);
    }

    Ok(Envelope::success("Assessment distributed!"))
}

pub async fn list_ongoing(
    State(distributions): State<DistributionRegistry>,
) -> impl IntoResponse {
    Envelope::success("Ongoing assessments retrieved!").with("ongoing", distributions.list())
}

/// Deletes every stored assessment. Only routed when reset is enabled.
pub async fn reset(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let deleted = store::assessments::delete_all(&pool).await?;
    tracing::warn!(deleted, "All assessments deleted by reset");

    Ok(Envelope::success("Assessments reset!").with("deleted", deleted))
}
