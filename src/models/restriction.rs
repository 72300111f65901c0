// src/models/restriction.rs

use serde::{Deserialize, Serialize};

/// A student barred from one assessment because monitoring flagged them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedStudent {
    pub assessment_id: i64,
    pub student_number: String,
    /// The activity that triggered the restriction.
    pub reason: String,
    pub student_name: String,
}

/// Activities reported by the client-side monitor that lead to a restriction.
pub const FLAGGED_ACTIVITIES: [&str; 2] = ["minimized", "cheating"];

pub fn is_flagged(activity: &str) -> bool {
    FLAGGED_ACTIVITIES.contains(&activity)
}

/// DTO posted by the monitor when it detects something.
#[derive(Debug, Deserialize)]
pub struct DetectedActivityRequest {
    pub student_number: String,
    pub assessment_id: i64,
    pub activity: String,
    #[serde(default)]
    pub student_name: String,
}

/// Narrows an unrestrict call to a single assessment.
#[derive(Debug, Default, Deserialize)]
pub struct UnrestrictParams {
    pub assessment_id: Option<i64>,
}
