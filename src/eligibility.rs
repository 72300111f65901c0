// src/eligibility.rs

use sqlx::SqlitePool;

use crate::{registry::RestrictionRegistry, store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Restricted,
    AlreadySubmitted,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        self == Eligibility::Eligible
    }

    pub fn message(self) -> &'static str {
        match self {
            Eligibility::Eligible => "Student is eligible!",
            Eligibility::Restricted => "Student is restricted from this assessment!",
            Eligibility::AlreadySubmitted => "Student has already taken this assessment!",
        }
    }
}

/// Whether a student may start an assessment: not restricted for it and no
/// stored result for the pair yet.
///
/// Read-only. Nothing reserves the slot, so two submissions racing past this
/// check can both be stored.
pub async fn check(
    pool: &SqlitePool,
    restrictions: &RestrictionRegistry,
    student_number: &str,
    assessment_id: i64,
) -> Result<Eligibility, sqlx::Error> {
    if restrictions.is_restricted(student_number, assessment_id) {
        return Ok(Eligibility::Restricted);
    }

    if store::results::exists_for(pool, student_number, assessment_id).await? {
        return Ok(Eligibility::AlreadySubmitted);
    }

    Ok(Eligibility::Eligible)
}
