use serde::Serialize;
use utoipa::ToSchema;

/// One student as seen from the teacher dashboard. Mock data independent of
/// any live student session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
    pub progress_percent: u8,
    pub lessons_completed: u32,
    pub quiz_average: u8,
}

fn student(id: i64, name: &str, progress: u8, lessons: u32, quiz_average: u8) -> RosterEntry {
    RosterEntry {
        id,
        name: name.to_string(),
        progress_percent: progress,
        lessons_completed: lessons,
        quiz_average,
    }
}

pub fn sample_class() -> Vec<RosterEntry> {
    vec![
        student(1, "Alice Johnson", 75, 3, 88),
        student(2, "Bob Smith", 50, 2, 92),
        student(3, "Carol Davis", 100, 4, 95),
        student(4, "David Wilson", 25, 1, 85),
    ]
}
