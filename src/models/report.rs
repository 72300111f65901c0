// src/models/report.rs

use serde::Serialize;
use sqlx::FromRow;

/// A student ranked by the sum of their result points.
#[derive(Debug, Serialize, FromRow)]
pub struct TopScorer {
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub total_points: f64,
    pub results: i64,
}

/// One 10-point-wide histogram bin, e.g. `11-20`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub range: String,
    pub count: i64,
}

/// Average score of the results submitted on one calendar day.
#[derive(Debug, Serialize, FromRow)]
pub struct DailyAverage {
    /// `YYYY-MM-DD`
    pub date: String,
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_assessments: i64,
    pub total_students: i64,
    pub total_results: i64,
    pub ongoing_count: usize,
    pub restricted_count: usize,
    pub top_scorers: Vec<TopScorer>,
    pub score_distribution: Vec<ScoreBucket>,
    pub average_over_time: Vec<DailyAverage>,
}
