// src/handlers/scores.rs

use axum::{extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, response::Envelope, store};

pub async fn average_over_time(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let averages = store::reports::average_over_time(&pool).await?;

    Ok(Envelope::success("Average scores retrieved!").with("averages", averages))
}

/// Ten buckets, `0-10` through `91-100`, always all present.
pub async fn distribution(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let buckets = store::reports::score_distribution(&pool).await?;

    Ok(Envelope::success("Score distribution retrieved!").with("distribution", buckets))
}
