use serde::Serialize;
use utoipa::ToSchema;

/// Knowledge quiz shown next to the lesson of the same index. The scores are
/// fixed demo data and deliberately not wired to lesson completion.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    /// Present exactly when the quiz is completed.
    pub score: Option<u8>,
    pub completed: bool,
}

fn quiz(id: i64, title: &str, score: Option<u8>) -> Quiz {
    Quiz {
        id,
        title: title.to_string(),
        score,
        completed: score.is_some(),
    }
}

pub fn catalog() -> Vec<Quiz> {
    vec![
        quiz(1, "Earthquake Quiz", Some(85)),
        quiz(2, "Fire Safety Quiz", Some(92)),
        quiz(3, "Flood Quiz", None),
        quiz(4, "First Aid Quiz", None),
        quiz(5, "Severe Weather Quiz", None),
        quiz(6, "Emergency Kit Quiz", None),
        quiz(7, "Evacuation Quiz", None),
    ]
}
