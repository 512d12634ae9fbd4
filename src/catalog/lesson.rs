use serde::Serialize;
use utoipa::ToSchema;

/// One entry of the fixed lesson catalog. The id doubles as the join key
/// into the student's progress set.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub video_ref: String,
    pub poster_ref: String,
    /// Display label, e.g. "8:30".
    pub duration: String,
    pub objectives: Vec<String>,
}

/// Download filename for a lesson poster: whitespace runs in the title
/// become single underscores.
pub fn poster_filename(title: &str) -> String {
    format!(
        "{}_Poster.jpg",
        title.split_whitespace().collect::<Vec<_>>().join("_")
    )
}

fn lesson(
    id: i64,
    title: &str,
    description: &str,
    asset_stem: &str,
    duration: &str,
    objectives: &[&str],
) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        description: description.to_string(),
        video_ref: format!("videos/{asset_stem}.mp4"),
        poster_ref: format!("posters/{asset_stem}.jpg"),
        duration: duration.to_string(),
        objectives: objectives.iter().map(|o| o.to_string()).collect(),
    }
}

pub fn catalog() -> Vec<Lesson> {
    vec![
        lesson(
            1,
            "Earthquake Safety",
            "Learn to Drop, Cover, and Hold On when the ground starts shaking.",
            "earthquake_safety",
            "8:30",
            &[
                "Recognize the warning signs of an earthquake",
                "Practice Drop, Cover, and Hold On",
                "Identify the safe spots in every classroom",
                "Know what to do once the shaking stops",
            ],
        ),
        lesson(
            2,
            "Fire Safety & Evacuation",
            "How to react to a fire alarm and leave the building quickly and calmly.",
            "fire_safety",
            "10:15",
            &[
                "Recognize the sound of the fire alarm",
                "Follow the posted evacuation route",
                "Stay low when moving under smoke",
                "Meet at the assembly point for roll call",
            ],
        ),
        lesson(
            3,
            "Flood Preparedness",
            "What rising water means for your school day and how to stay safe.",
            "flood_preparedness",
            "7:45",
            &[
                "Understand the difference between a flood watch and a warning",
                "Move to the upper floors calmly",
                "Never walk or play in floodwater",
            ],
        ),
        lesson(
            4,
            "First Aid Basics",
            "Simple first aid every student can learn and use.",
            "first_aid_basics",
            "12:00",
            &[
                "Treat small cuts and scrapes",
                "Recognize when to call for adult help",
                "Place an injured person in the recovery position",
            ],
        ),
        lesson(
            5,
            "Severe Weather & Lightning",
            "Thunderstorms, lightning and high winds: sheltering indoors the right way.",
            "severe_weather",
            "9:20",
            &[
                "Count the seconds between flash and thunder",
                "Stay away from windows during a storm",
                "Know where the shelter areas are",
            ],
        ),
        lesson(
            6,
            "Emergency Kits & Supplies",
            "Build a classroom emergency kit and know what belongs in it.",
            "emergency_kits",
            "6:50",
            &[
                "List the essentials of an emergency kit",
                "Check supplies for expiry dates",
                "Store the kit where everyone can find it",
            ],
        ),
        lesson(
            7,
            "Evacuation Drills & Family Plans",
            "Practice makes calm: drills at school and emergency plans at home.",
            "evacuation_drills",
            "11:05",
            &[
                "Walk the full evacuation route without rushing",
                "Agree on a family meeting point",
                "Keep emergency contact cards up to date",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_filename_replaces_whitespace_runs() {
        assert_eq!(
            poster_filename("Earthquake Safety"),
            "Earthquake_Safety_Poster.jpg"
        );
        assert_eq!(
            poster_filename("Fire Safety & Evacuation"),
            "Fire_Safety_&_Evacuation_Poster.jpg"
        );
        assert_eq!(
            poster_filename("Severe  Weather\tDrill"),
            "Severe_Weather_Drill_Poster.jpg"
        );
    }
}
