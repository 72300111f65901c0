// src/registry/restriction.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::restriction::{RestrictedStudent, is_flagged};

/// Outcome of feeding a monitoring report into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    Restricted,
    /// Not a flagged activity; nothing changed.
    Logged,
}

/// Process-wide list of students flagged during a specific assessment.
///
/// Duplicates are kept: each flagged report appends a record. Clones share
/// the same list.
#[derive(Debug, Clone, Default)]
pub struct RestrictionRegistry {
    restricted: Arc<Mutex<Vec<RestrictedStudent>>>,
}

impl RestrictionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RestrictedStudent>> {
        self.restricted.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn report_activity(
        &self,
        student_number: &str,
        assessment_id: i64,
        activity: &str,
        student_name: &str,
    ) -> ActivityOutcome {
        if !is_flagged(activity) {
            return ActivityOutcome::Logged;
        }

        self.lock().push(RestrictedStudent {
            assessment_id,
            student_number: student_number.to_string(),
            reason: activity.to_string(),
            student_name: student_name.to_string(),
        });
        ActivityOutcome::Restricted
    }

    pub fn is_restricted(&self, student_number: &str, assessment_id: i64) -> bool {
        self.lock()
            .iter()
            .any(|r| r.student_number == student_number && r.assessment_id == assessment_id)
    }

    /// Removes the student's records and returns how many were dropped.
    ///
    /// With `assessment_id` only that assessment's records go; without it
    /// every record of the student goes, across all assessments.
    pub fn unrestrict(&self, student_number: &str, assessment_id: Option<i64>) -> usize {
        let mut restricted = self.lock();
        let before = restricted.len();

        restricted.retain(|r| {
            let same_student = r.student_number == student_number;
            let same_assessment = assessment_id.is_none_or(|id| r.assessment_id == id);
            !(same_student && same_assessment)
        });

        before - restricted.len()
    }

    /// Snapshot of all restriction records, oldest first.
    pub fn list(&self) -> Vec<RestrictedStudent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheating_adds_exactly_one_record() {
        let registry = RestrictionRegistry::new();

        let outcome = registry.report_activity("2024-001", 7, "cheating", "Ada Reyes");

        assert_eq!(outcome, ActivityOutcome::Restricted);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list()[0].reason, "cheating");
    }

    #[test]
    fn other_activities_are_only_logged() {
        let registry = RestrictionRegistry::new();

        assert_eq!(
            registry.report_activity("2024-001", 7, "focus-lost", "Ada Reyes"),
            ActivityOutcome::Logged
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn repeated_reports_are_not_deduplicated() {
        let registry = RestrictionRegistry::new();

        registry.report_activity("2024-001", 7, "minimized", "Ada Reyes");
        registry.report_activity("2024-001", 7, "minimized", "Ada Reyes");

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn restriction_matches_the_exact_pair() {
        let registry = RestrictionRegistry::new();
        registry.report_activity("2024-001", 7, "cheating", "Ada Reyes");

        assert!(registry.is_restricted("2024-001", 7));
        assert!(!registry.is_restricted("2024-001", 8));
        assert!(!registry.is_restricted("2024-002", 7));
    }

    #[test]
    fn unrestrict_without_assessment_clears_every_assessment() {
        let registry = RestrictionRegistry::new();
        registry.report_activity("2024-001", 7, "cheating", "Ada Reyes");
        registry.report_activity("2024-001", 8, "minimized", "Ada Reyes");
        registry.report_activity("2024-002", 7, "cheating", "Ben Cruz");

        assert_eq!(registry.unrestrict("2024-001", None), 2);

        assert!(!registry.is_restricted("2024-001", 7));
        assert!(!registry.is_restricted("2024-001", 8));
        assert!(registry.is_restricted("2024-002", 7));
    }

    #[test]
    fn unrestrict_scoped_to_one_assessment() {
        let registry = RestrictionRegistry::new();
        registry.report_activity("2024-001", 7, "cheating", "Ada Reyes");
        registry.report_activity("2024-001", 8, "minimized", "Ada Reyes");

        assert_eq!(registry.unrestrict("2024-001", Some(7)), 1);

        assert!(!registry.is_restricted("2024-001", 7));
        assert!(registry.is_restricted("2024-001", 8));
    }

    #[test]
    fn unrestrict_unknown_student_removes_nothing() {
        let registry = RestrictionRegistry::new();
        registry.report_activity("2024-001", 7, "cheating", "Ada Reyes");

        assert_eq!(registry.unrestrict("2024-999", None), 0);
        assert_eq!(registry.len(), 1);
    }
}
