// src/registry/distribution.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::assessment::{Assessment, AssessmentKey};

/// Process-wide list of ongoing assessments.
///
/// Entries live only in memory: they are created by `distribute`, removed by
/// `stop`, and lost on restart. There is no expiry; `time_limit` is left to
/// the client. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct DistributionRegistry {
    ongoing: Arc<Mutex<Vec<Assessment>>>,
}

impl DistributionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Assessment>> {
        // Every mutation leaves the list consistent, so a poisoned lock is still usable.
        self.ongoing.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds the assessment unless one with the same title and description is
    /// already ongoing. Returns `false` when rejected.
    pub fn distribute(&self, assessment: Assessment) -> bool {
        let key = assessment.key();
        let mut ongoing = self.lock();

        if ongoing.iter().any(|a| key.matches(a)) {
            return false;
        }
        ongoing.push(assessment);
        true
    }

    /// Snapshot of the ongoing assessments, in distribution order.
    pub fn list(&self) -> Vec<Assessment> {
        self.lock().clone()
    }

    /// Removes the first entry matching `key` and returns it.
    pub fn stop(&self, key: &AssessmentKey) -> Option<Assessment> {
        let mut ongoing = self.lock();
        let position = ongoing.iter().position(|a| key.matches(a))?;
        Some(ongoing.remove(position))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
