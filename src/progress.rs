use std::collections::BTreeSet;

/// Lesson ids completed during the demo before the student ever signs in.
pub const DEMO_SEED: [i64; 2] = [1, 2];

/// Lessons the signed-in student has finished. Scoped to one sign-in and
/// discarded on logout; completion is a set insert, so repeats are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    completed: BTreeSet<i64>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProgressState {
    /// Fresh progress pre-seeded with the demo lessons.
    pub fn seeded() -> Self {
        Self {
            completed: DEMO_SEED.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            completed: BTreeSet::new(),
        }
    }

    /// Returns false when the lesson was already completed.
    pub fn complete(&mut self, lesson_id: i64) -> bool {
        self.completed.insert(lesson_id)
    }

    pub fn is_completed(&self, lesson_id: i64) -> bool {
        self.completed.contains(&lesson_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_ids(&self) -> &BTreeSet<i64> {
        &self.completed
    }

    /// Overall progress as a whole percentage of the catalog.
    pub fn percent(&self, catalog_size: usize) -> u8 {
        if catalog_size == 0 {
            return 0;
        }
        (self.completed.len() as f64 * 100.0 / catalog_size as f64).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_the_demo_seed() {
        let progress = ProgressState::seeded();
        assert_eq!(progress.completed_count(), 2);
        assert!(progress.is_completed(1));
        assert!(progress.is_completed(2));
        assert!(!progress.is_completed(3));
    }

    #[test]
    fn completion_is_monotonic_and_idempotent() {
        let mut progress = ProgressState::seeded();

        assert!(progress.complete(3));
        assert_eq!(progress.completed_count(), 3);

        // repeating the same lesson changes nothing
        assert!(!progress.complete(3));
        assert_eq!(progress.completed_count(), 3);

        assert!(!progress.complete(1));
        assert_eq!(progress.completed_count(), 3);
    }

    #[test]
    fn count_never_exceeds_the_catalog() {
        let mut progress = ProgressState::empty();
        for id in 1..=7 {
            progress.complete(id);
        }
        for id in 1..=7 {
            progress.complete(id);
        }
        assert_eq!(progress.completed_count(), 7);
        assert_eq!(progress.percent(7), 100);
    }

    #[test]
    fn percent_matches_the_completion_ratio() {
        let mut progress = ProgressState::empty();
        assert_eq!(progress.percent(7), 0);

        progress.complete(1);
        progress.complete(2);
        // 2 of 7 rounds to 29
        assert_eq!(progress.percent(7), 29);

        for id in 3..=7 {
            progress.complete(id);
        }
        assert_eq!(progress.percent(7), 100);
    }

    #[test]
    fn percent_of_an_empty_catalog_is_zero() {
        assert_eq!(ProgressState::empty().percent(0), 0);
    }
}
