use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{CatalogRepository, Lesson};
use crate::error::Error;
use crate::progress::ProgressState;

/// Sidebar panels of the student dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StudentTab {
    #[default]
    Lessons,
    Quizzes,
    Badges,
    Progress,
}

/// Sidebar panels of the teacher dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeacherTab {
    #[default]
    Alerts,
    Progress,
    Reports,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VideoState {
    #[default]
    Stopped,
    Playing,
}

/// One opened lesson detail view. Playback state lives and dies with the
/// view: opening a lesson always starts from `Stopped` with completion
/// locked.
#[derive(Debug, Clone)]
pub struct LessonViewer {
    lesson_id: i64,
    video: VideoState,
    played_once: bool,
}

impl LessonViewer {
    fn open(lesson_id: i64) -> Self {
        Self {
            lesson_id,
            video: VideoState::Stopped,
            played_once: false,
        }
    }

    pub fn lesson_id(&self) -> i64 {
        self.lesson_id
    }

    pub fn video(&self) -> VideoState {
        self.video
    }

    pub fn play(&mut self) {
        self.video = VideoState::Playing;
        self.played_once = true;
    }

    pub fn pause(&mut self) {
        self.video = VideoState::Stopped;
    }

    /// Completion stays unlocked once the video has played, even after a
    /// pause.
    pub fn completion_unlocked(&self) -> bool {
        self.played_once
    }
}

/// Lesson list row: the catalog entry annotated with this session's
/// completion state.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonSummary {
    pub id: i64,
    pub title: String,
    pub duration: String,
    pub completed: bool,
}

/// Everything the student sees, owned for the lifetime of one sign-in.
#[derive(Debug, Clone, Default)]
pub struct StudentDashboard {
    tab: StudentTab,
    progress: ProgressState,
    viewer: Option<LessonViewer>,
}

impl StudentDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> StudentTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: StudentTab) {
        self.tab = tab;
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn viewer(&self) -> Option<&LessonViewer> {
        self.viewer.as_ref()
    }

    pub fn list_lessons(&self, catalog: &dyn CatalogRepository) -> Vec<LessonSummary> {
        catalog
            .lessons()
            .iter()
            .map(|lesson| LessonSummary {
                id: lesson.id,
                title: lesson.title.clone(),
                duration: lesson.duration.clone(),
                completed: self.progress.is_completed(lesson.id),
            })
            .collect()
    }

    /// Drill into a lesson. Unknown ids render nothing and change nothing.
    pub fn open_lesson<'c>(
        &mut self,
        catalog: &'c dyn CatalogRepository,
        id: i64,
    ) -> Option<&'c Lesson> {
        let lesson = catalog.lesson(id)?;
        self.viewer = Some(LessonViewer::open(id));
        Some(lesson)
    }

    /// Back to the lesson list, dropping the view's playback state.
    pub fn close_lesson(&mut self) {
        self.viewer = None;
    }

    pub fn play_video(&mut self) -> Result<(), Error> {
        self.viewer.as_mut().ok_or(Error::NoLessonOpen)?.play();
        Ok(())
    }

    pub fn pause_video(&mut self) -> Result<(), Error> {
        self.viewer.as_mut().ok_or(Error::NoLessonOpen)?.pause();
        Ok(())
    }

    /// Mark the open lesson complete and return to the catalog list.
    /// Requires the video to have been played in this view; completing an
    /// already-completed lesson is a no-op.
    pub fn complete_lesson(&mut self) -> Result<i64, Error> {
        let viewer = self.viewer.as_ref().ok_or(Error::NoLessonOpen)?;
        if !viewer.completion_unlocked() {
            return Err(Error::VideoNotPlayed);
        }
        let id = viewer.lesson_id();
        self.progress.complete(id);
        self.viewer = None;
        Ok(id)
    }
}

/// Teacher-side view state; the roster and reports are derived elsewhere.
#[derive(Debug, Clone, Default)]
pub struct TeacherDashboard {
    tab: TeacherTab,
}

impl TeacherDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> TeacherTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: TeacherTab) {
        self.tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn starts_on_the_lessons_tab_with_seeded_progress() {
        let dashboard = StudentDashboard::new();
        assert_eq!(dashboard.tab(), StudentTab::Lessons);
        assert_eq!(dashboard.progress().completed_count(), 2);
        assert!(dashboard.viewer().is_none());
    }

    #[test]
    fn lesson_list_is_annotated_with_completion() {
        let catalog = StaticCatalog::new();
        let dashboard = StudentDashboard::new();
        let rows = dashboard.list_lessons(&catalog);
        assert_eq!(rows.len(), 7);
        assert!(rows[0].completed);
        assert!(rows[1].completed);
        assert!(rows[2..].iter().all(|row| !row.completed));
    }

    #[test]
    fn opening_an_unknown_lesson_is_a_benign_no_op() {
        let catalog = StaticCatalog::new();
        let mut dashboard = StudentDashboard::new();
        assert!(dashboard.open_lesson(&catalog, 99).is_none());
        assert!(dashboard.viewer().is_none());
    }

    #[test]
    fn completion_is_rejected_until_the_video_has_played() {
        let catalog = StaticCatalog::new();
        let mut dashboard = StudentDashboard::new();
        dashboard.open_lesson(&catalog, 3).unwrap();

        assert!(matches!(
            dashboard.complete_lesson(),
            Err(Error::VideoNotPlayed)
        ));
        assert!(!dashboard.progress().is_completed(3));
        // the rejected attempt keeps the detail view open
        assert!(dashboard.viewer().is_some());

        dashboard.play_video().unwrap();
        assert_eq!(dashboard.complete_lesson().unwrap(), 3);
        assert!(dashboard.progress().is_completed(3));
        assert!(dashboard.viewer().is_none());
    }

    #[test]
    fn playing_then_pausing_still_permits_completion() {
        let catalog = StaticCatalog::new();
        let mut dashboard = StudentDashboard::new();
        dashboard.open_lesson(&catalog, 4).unwrap();

        dashboard.play_video().unwrap();
        dashboard.pause_video().unwrap();
        assert_eq!(dashboard.viewer().unwrap().video(), VideoState::Stopped);

        // the gate remembers that playback happened in this view
        assert_eq!(dashboard.complete_lesson().unwrap(), 4);
        assert!(dashboard.progress().is_completed(4));
    }

    #[test]
    fn reopening_a_lesson_resets_the_playback_gate() {
        let catalog = StaticCatalog::new();
        let mut dashboard = StudentDashboard::new();

        dashboard.open_lesson(&catalog, 5).unwrap();
        dashboard.play_video().unwrap();
        dashboard.close_lesson();

        dashboard.open_lesson(&catalog, 5).unwrap();
        assert!(!dashboard.viewer().unwrap().completion_unlocked());
        assert!(matches!(
            dashboard.complete_lesson(),
            Err(Error::VideoNotPlayed)
        ));
    }

    #[test]
    fn completing_a_completed_lesson_changes_nothing() {
        let catalog = StaticCatalog::new();
        let mut dashboard = StudentDashboard::new();

        dashboard.open_lesson(&catalog, 1).unwrap();
        dashboard.play_video().unwrap();
        dashboard.complete_lesson().unwrap();
        assert_eq!(dashboard.progress().completed_count(), 2);
    }

    #[test]
    fn video_controls_require_an_open_lesson() {
        let mut dashboard = StudentDashboard::new();
        assert!(matches!(dashboard.play_video(), Err(Error::NoLessonOpen)));
        assert!(matches!(dashboard.pause_video(), Err(Error::NoLessonOpen)));
        assert!(matches!(
            dashboard.complete_lesson(),
            Err(Error::NoLessonOpen)
        ));
    }

    #[test]
    fn tabs_are_plain_assignment() {
        let mut student = StudentDashboard::new();
        student.select_tab(StudentTab::Badges);
        assert_eq!(student.tab(), StudentTab::Badges);

        let mut teacher = TeacherDashboard::new();
        assert_eq!(teacher.tab(), TeacherTab::Alerts);
        teacher.select_tab(TeacherTab::Reports);
        assert_eq!(teacher.tab(), TeacherTab::Reports);
    }
}
