pub mod badge;
pub mod lesson;
pub mod quiz;
pub mod roster;

pub use badge::Badge;
pub use lesson::Lesson;
pub use quiz::Quiz;
pub use roster::RosterEntry;

/// Read-only source of the domain records shown on the dashboards.
///
/// The only implementation is in-memory mock data; a real backing store
/// would slot in behind this trait without touching the consumers.
pub trait CatalogRepository {
    fn lessons(&self) -> &[Lesson];
    fn quizzes(&self) -> &[Quiz];
    fn badges(&self) -> &[Badge];
    fn roster(&self) -> &[RosterEntry];

    fn lesson(&self, id: i64) -> Option<&Lesson> {
        self.lessons().iter().find(|lesson| lesson.id == id)
    }
}

/// The bundled SafeSchool catalogs. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    lessons: Vec<Lesson>,
    quizzes: Vec<Quiz>,
    badges: Vec<Badge>,
    roster: Vec<RosterEntry>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            lessons: lesson::catalog(),
            quizzes: quiz::catalog(),
            badges: badge::catalog(),
            roster: roster::sample_class(),
        }
    }
}

impl CatalogRepository for StaticCatalog {
    fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    fn badges(&self) -> &[Badge] {
        &self.badges
    }

    fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_ids_are_unique_and_contiguous() {
        let catalog = StaticCatalog::new();
        let ids: Vec<i64> = catalog.lessons().iter().map(|l| l.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<i64>>());
    }

    #[test]
    fn lesson_lookup_is_by_id() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.lesson(1).unwrap().title, "Earthquake Safety");
        assert!(catalog.lesson(0).is_none());
        assert!(catalog.lesson(8).is_none());
    }

    #[test]
    fn quizzes_parallel_the_lessons() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.quizzes().len(), catalog.lessons().len());
    }

    #[test]
    fn quiz_score_and_completion_agree() {
        for quiz in StaticCatalog::new().quizzes() {
            assert_eq!(quiz.completed, quiz.score.is_some(), "quiz {}", quiz.id);
        }
    }

    #[test]
    fn every_lesson_has_objectives_and_assets() {
        for lesson in StaticCatalog::new().lessons() {
            assert!(!lesson.objectives.is_empty(), "lesson {}", lesson.id);
            assert!(!lesson.video_ref.is_empty());
            assert!(!lesson.poster_ref.is_empty());
        }
    }

    #[test]
    fn roster_is_the_sample_class() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.roster().len(), 4);
        let percents: Vec<u8> = catalog
            .roster()
            .iter()
            .map(|s| s.progress_percent)
            .collect();
        assert_eq!(percents, vec![75, 50, 100, 25]);
    }
}
