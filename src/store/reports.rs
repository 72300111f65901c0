// src/store/reports.rs

//! Read-only aggregations over `assessment_results` for the dashboard.

use sqlx::SqlitePool;

use crate::models::report::{DailyAverage, ScoreBucket, TopScorer};

/// Inclusive upper bounds of the histogram bins.
const BUCKET_UPPER_BOUNDS: [u32; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

fn bucket_label(index: usize) -> String {
    let upper = BUCKET_UPPER_BOUNDS[index];
    let lower = if index == 0 { 0 } else { BUCKET_UPPER_BOUNDS[index - 1] + 1 };
    format!("{lower}-{upper}")
}

/// Counts scores into ten bins labelled `0-10`, `11-20`, …, `91-100`.
///
/// A score goes into the first bin whose upper bound it does not exceed.
/// Anything above 100 is counted in the last bin.
pub fn bucket_scores(scores: &[f64]) -> Vec<ScoreBucket> {
    let mut counts = [0i64; BUCKET_UPPER_BOUNDS.len()];

    for &score in scores {
        let index = BUCKET_UPPER_BOUNDS
            .iter()
            .position(|&upper| score <= f64::from(upper))
            .unwrap_or(BUCKET_UPPER_BOUNDS.len() - 1);
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(index, &count)| ScoreBucket {
            range: bucket_label(index),
            count,
        })
        .collect()
}

pub async fn score_distribution(pool: &SqlitePool) -> Result<Vec<ScoreBucket>, sqlx::Error> {
    let scores: Vec<f64> = sqlx::query_scalar("SELECT total_points FROM assessment_results")
        .fetch_all(pool)
        .await?;

    Ok(bucket_scores(&scores))
}

/// Students ranked by the sum of their points across all results.
pub async fn top_scorers(pool: &SqlitePool, limit: i64) -> Result<Vec<TopScorer>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            r.student_number,
            s.first_name,
            s.last_name,
            SUM(r.total_points) AS total_points,
            COUNT(*) AS results
        FROM assessment_results r
        LEFT JOIN students s ON s.student_number = r.student_number
        GROUP BY r.student_number, s.first_name, s.last_name
        ORDER BY total_points DESC, r.student_number
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Average score per calendar day (UTC) of submission, oldest day first.
pub async fn average_over_time(pool: &SqlitePool) -> Result<Vec<DailyAverage>, sqlx::Error> {
    // created_at is RFC 3339 text, so its first ten characters are the date.
    sqlx::query_as(
        r#"
        SELECT
            substr(created_at, 1, 10) AS date,
            AVG(total_points) AS average,
            COUNT(*) AS count
        FROM assessment_results
        GROUP BY substr(created_at, 1, 10)
        ORDER BY substr(created_at, 1, 10)
        "#,
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(buckets: &[ScoreBucket], range: &str) -> i64 {
        buckets.iter().find(|b| b.range == range).unwrap().count
    }

    #[test]
    fn buckets_use_inclusive_upper_bounds() {
        let buckets = bucket_scores(&[5.0, 15.0, 100.0]);

        assert_eq!(buckets.len(), 10);
        assert_eq!(count_of(&buckets, "0-10"), 1);
        assert_eq!(count_of(&buckets, "11-20"), 1);
        assert_eq!(count_of(&buckets, "91-100"), 1);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<i64>(), 3);
    }

    #[test]
    fn boundaries_fall_in_the_lower_bin() {
        let buckets = bucket_scores(&[10.0, 20.0, 10.5]);

        assert_eq!(count_of(&buckets, "0-10"), 1);
        assert_eq!(count_of(&buckets, "11-20"), 2);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let buckets = bucket_scores(&[-3.0, 140.0]);

        assert_eq!(count_of(&buckets, "0-10"), 1);
        assert_eq!(count_of(&buckets, "91-100"), 1);
    }

    #[test]
    fn labels_are_in_order() {
        let labels: Vec<String> = bucket_scores(&[]).into_iter().map(|b| b.range).collect();

        assert_eq!(labels.first().map(String::as_str), Some("0-10"));
        assert_eq!(labels.get(4).map(String::as_str), Some("41-50"));
        assert_eq!(labels.last().map(String::as_str), Some("91-100"));
    }
}
