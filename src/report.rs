use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{CatalogRepository, Quiz, RosterEntry};
use crate::progress::ProgressState;

/// Class-wide aggregates for the teacher's report panel. Recomputed on each
/// request; the roster is small and fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassReport {
    pub total_students: usize,
    /// Arithmetic mean of the roster progress, rounded for display.
    pub average_progress: u8,
    /// Students below 50% progress.
    pub at_risk_count: usize,
}

pub fn class_report(roster: &[RosterEntry]) -> ClassReport {
    let total = roster.len();
    let average = if total == 0 {
        0.0
    } else {
        roster
            .iter()
            .map(|student| f64::from(student.progress_percent))
            .sum::<f64>()
            / total as f64
    };
    ClassReport {
        total_students: total,
        average_progress: average.round() as u8,
        at_risk_count: roster
            .iter()
            .filter(|student| student.progress_percent < 50)
            .count(),
    }
}

/// Status label shown next to a student's progress bar.
pub fn status_label(progress_percent: u8) -> &'static str {
    if progress_percent >= 75 {
        "Excellent"
    } else if progress_percent >= 50 {
        "Good"
    } else {
        "Needs Support"
    }
}

/// Roster row as rendered on the teacher's progress panel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentOverview {
    pub id: i64,
    pub name: String,
    pub progress_percent: u8,
    pub lessons_completed: u32,
    pub quiz_average: u8,
    pub status: String,
}

pub fn roster_overview(roster: &[RosterEntry]) -> Vec<StudentOverview> {
    roster
        .iter()
        .map(|student| StudentOverview {
            id: student.id,
            name: student.name.clone(),
            progress_percent: student.progress_percent,
            lessons_completed: student.lessons_completed,
            quiz_average: student.quiz_average,
            status: status_label(student.progress_percent).to_string(),
        })
        .collect()
}

/// Mean score across completed quizzes; `None` when nothing is completed.
pub fn quiz_average(quizzes: &[Quiz]) -> Option<f64> {
    let scores: Vec<f64> = quizzes
        .iter()
        .filter_map(|quiz| quiz.score.map(f64::from))
        .collect();
    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// The student's own progress panel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProgressSummary {
    pub percent: u8,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub quiz_average: Option<f64>,
}

pub fn progress_summary(
    progress: &ProgressState,
    catalog: &dyn CatalogRepository,
) -> ProgressSummary {
    let total = catalog.lessons().len();
    ProgressSummary {
        percent: progress.percent(total),
        completed_lessons: progress.completed_count(),
        total_lessons: total,
        quiz_average: quiz_average(catalog.quizzes()),
    }
}
