// src/handlers/pages.rs

use axum::{extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::report::DashboardSummary,
    registry::{DistributionRegistry, RestrictionRegistry},
    response::Envelope,
    store,
};

const TOP_SCORER_LIMIT: i64 = 5;

/// Snapshot of both registries for the instructor's control page.
pub async fn manage_assessments(
    State(distributions): State<DistributionRegistry>,
    State(restrictions): State<RestrictionRegistry>,
) -> impl IntoResponse {
    Envelope::success("Assessment management data retrieved!")
        .with("ongoing", distributions.list())
        .with("restricted", restrictions.list())
}

pub async fn dashboard(
    State(pool): State<SqlitePool>,
    State(distributions): State<DistributionRegistry>,
    State(restrictions): State<RestrictionRegistry>,
) -> Result<impl IntoResponse, AppError> {
    let summary = DashboardSummary {
        total_assessments: store::assessments::count(&pool).await?,
        total_students: store::students::count(&pool).await?,
        total_results: store::results::count(&pool).await?,
        ongoing_count: distributions.len(),
        restricted_count: restrictions.len(),
        top_scorers: store::reports::top_scorers(&pool, TOP_SCORER_LIMIT).await?,
        score_distribution: store::reports::score_distribution(&pool).await?,
        average_over_time: store::reports::average_over_time(&pool).await?,
    };

    Ok(Envelope::success("Dashboard data retrieved!").with("dashboard", summary))
}

pub async fn manage_students(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let students = store::students::list(&pool).await?;

    Ok(Envelope::success("Students retrieved!").with("students", students))
}

pub async fn assessment_results(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let results = store::results::list_summaries(&pool).await?;

    Ok(Envelope::success("Assessment results retrieved!").with("results", results))
}
