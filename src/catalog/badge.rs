use serde::Serialize;
use utoipa::ToSchema;

/// Achievement badge. The `earned` flags are fixed demo data; the
/// descriptions read as if they were derived from progress, but they are not.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Badge {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub earned: bool,
}

fn badge(id: i64, title: &str, description: &str, earned: bool) -> Badge {
    Badge {
        id,
        title: title.to_string(),
        description: description.to_string(),
        earned,
    }
}

pub fn catalog() -> Vec<Badge> {
    vec![
        badge(
            1,
            "Earthquake Expert",
            "Completed earthquake safety course",
            true,
        ),
        badge(2, "Fire Safety Hero", "Scored 90+ on fire safety quiz", true),
        badge(3, "Safety Scholar", "Complete all lessons", false),
        badge(4, "Quiz Master", "Score 95+ on all quizzes", false),
    ]
}
