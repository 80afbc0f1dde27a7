//! Exercise library with search and filters, and the custom workout builder

use crate::catalog::Difficulty;
use crate::plans::{PlannedExercise, Reps, WorkoutPlan};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named variation of a library exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variation {
    pub id: String,
    pub name: String,
    /// Relative to the base exercise: "Easier", "Similar", "Harder"...
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
}

/// Library entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryExercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub primary_muscle: String,
    pub secondary_muscles: Vec<String>,
    pub difficulty: Difficulty,
    pub equipment: String,
    pub description: String,
    pub variations: Vec<Variation>,
}

impl LibraryExercise {
    fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.category.to_lowercase().contains(query)
            || self.primary_muscle.to_lowercase().contains(query)
            || self
                .secondary_muscles
                .iter()
                .any(|m| m.to_lowercase().contains(query))
    }

    fn works_muscle(&self, muscle: &str) -> bool {
        self.primary_muscle.eq_ignore_ascii_case(muscle)
            || self
                .secondary_muscles
                .iter()
                .any(|m| m.eq_ignore_ascii_case(muscle))
    }
}

/// Library filter; `None` or `"all"` disables a criterion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryFilter {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub muscle: Option<String>,
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
}

impl LibraryFilter {
    pub fn apply<'a>(&self, exercises: &'a [LibraryExercise]) -> Vec<&'a LibraryExercise> {
        let query = self
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let category = active(&self.category);
        let muscle = active(&self.muscle);

        exercises
            .iter()
            .filter(|e| query.as_deref().map_or(true, |q| e.matches_query(q)))
            .filter(|e| category.map_or(true, |c| e.category.eq_ignore_ascii_case(c)))
            .filter(|e| muscle.map_or(true, |m| e.works_muscle(m)))
            .collect()
    }
}

fn variation(id: &str, name: &str, difficulty: &str) -> Variation {
    Variation {
        id: id.to_string(),
        name: name.to_string(),
        difficulty: difficulty.to_string(),
        equipment: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static LIBRARY: Lazy<Vec<LibraryExercise>> = Lazy::new(|| {
    vec![
        LibraryExercise {
            id: "1".to_string(),
            name: "Push-ups".to_string(),
            category: "Bodyweight".to_string(),
            primary_muscle: "Chest".to_string(),
            secondary_muscles: strings(&["Shoulders", "Triceps"]),
            difficulty: Difficulty::Beginner,
            equipment: "None".to_string(),
            description: "Start in a plank position with hands shoulder-width apart. Lower your body until your chest nearly touches the floor, then push back up.".to_string(),
            variations: vec![
                variation("1a", "Incline Push-ups", "Easier"),
                variation("1b", "Decline Push-ups", "Harder"),
                variation("1c", "Diamond Push-ups", "Harder"),
            ],
        },
        LibraryExercise {
            id: "2".to_string(),
            name: "Squats".to_string(),
            category: "Bodyweight".to_string(),
            primary_muscle: "Quadriceps".to_string(),
            secondary_muscles: strings(&["Glutes", "Hamstrings", "Calves"]),
            difficulty: Difficulty::Beginner,
            equipment: "None".to_string(),
            description: "Stand with feet shoulder-width apart. Lower your body by bending knees and pushing hips back as if sitting in a chair. Return to standing position.".to_string(),
            variations: vec![
                variation("2a", "Jump Squats", "Harder"),
                variation("2b", "Bulgarian Split Squats", "Harder"),
                Variation {
                    equipment: Some("Dumbbell".to_string()),
                    ..variation("2c", "Goblet Squats", "Moderate")
                },
            ],
        },
        LibraryExercise {
            id: "3".to_string(),
            name: "Dumbbell Rows".to_string(),
            category: "Strength".to_string(),
            primary_muscle: "Back".to_string(),
            secondary_muscles: strings(&["Biceps", "Shoulders"]),
            difficulty: Difficulty::Beginner,
            equipment: "Dumbbells".to_string(),
            description: "Place one knee and hand on a bench, with the other foot on the floor. Hold a dumbbell in your free hand, pull it toward your hip while keeping your back flat.".to_string(),
            variations: vec![
                variation("3a", "Bent Over Rows", "Similar"),
                variation("3b", "Renegade Rows", "Harder"),
            ],
        },
        LibraryExercise {
            id: "4".to_string(),
            name: "Lunges".to_string(),
            category: "Bodyweight".to_string(),
            primary_muscle: "Quadriceps".to_string(),
            secondary_muscles: strings(&["Glutes", "Hamstrings"]),
            difficulty: Difficulty::Beginner,
            equipment: "None".to_string(),
            description: "Stand with feet hip-width apart. Step forward with one leg and lower your body until both knees are bent at 90-degree angles. Push back to starting position.".to_string(),
            variations: vec![
                variation("4a", "Walking Lunges", "Similar"),
                variation("4b", "Reverse Lunges", "Similar"),
                variation("4c", "Jump Lunges", "Harder"),
            ],
        },
        LibraryExercise {
            id: "5".to_string(),
            name: "Plank".to_string(),
            category: "Bodyweight".to_string(),
            primary_muscle: "Core".to_string(),
            secondary_muscles: strings(&["Shoulders", "Back"]),
            difficulty: Difficulty::Beginner,
            equipment: "None".to_string(),
            description: "Start in a forearm plank position with elbows directly beneath shoulders. Keep your body in a straight line from head to heels, engaging your core.".to_string(),
            variations: vec![
                variation("5a", "Side Plank", "Similar"),
                variation("5b", "Plank with Shoulder Taps", "Harder"),
                variation("5c", "Plank Jacks", "Harder"),
            ],
        },
    ]
});

/// The built-in exercise library
pub fn library() -> &'static [LibraryExercise] {
    &LIBRARY
}

/// Default prescription for exercises added from the library
pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 12;
pub const DEFAULT_REST_SECS: &str = "60";

/// A library exercise queued for a custom workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntry {
    pub custom_id: Uuid,
    pub exercise_id: String,
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub reps: Reps,
    pub rest_time: String,
}

/// Editable change to a queued entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EntryEdit {
    Sets(u32),
    Reps(Reps),
    RestTime(String),
}

/// Builds a workout from library picks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomWorkoutBuilder {
    entries: Vec<CustomEntry>,
}

impl CustomWorkoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CustomEntry] {
        &self.entries
    }

    /// Queue an exercise with the default prescription; returns its entry id
    pub fn add(&mut self, exercise: &LibraryExercise) -> Uuid {
        let custom_id = Uuid::new_v4();
        self.entries.push(CustomEntry {
            custom_id,
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            sets: DEFAULT_SETS,
            reps: Reps::Count(DEFAULT_REPS),
            rest_time: DEFAULT_REST_SECS.to_string(),
        });
        custom_id
    }

    pub fn remove(&mut self, custom_id: Uuid) {
        self.entries.retain(|e| e.custom_id != custom_id);
    }

    /// Apply an edit; returns false if no entry has that id
    pub fn edit(&mut self, custom_id: Uuid, edit: EntryEdit) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.custom_id == custom_id) else {
            return false;
        };
        match edit {
            EntryEdit::Sets(sets) => entry.sets = sets,
            EntryEdit::Reps(reps) => entry.reps = reps,
            EntryEdit::RestTime(rest) => entry.rest_time = rest,
        }
        true
    }

    /// Replace the exercises of `base` (keeping its duration and tips)
    pub fn build(&self, base: Option<&WorkoutPlan>) -> WorkoutPlan {
        let exercises = self
            .entries
            .iter()
            .map(|e| PlannedExercise {
                name: e.name.clone(),
                sets: e.sets,
                reps: e.reps.clone(),
                rest_time: e.rest_time.clone(),
                description: e.description.clone(),
            })
            .collect();

        WorkoutPlan {
            name: "Custom Workout Plan".to_string(),
            duration: base.map(|p| p.duration.clone()).unwrap_or_default(),
            exercises,
            tips: base.map(|p| p.tips.clone()).unwrap_or_default(),
        }
    }
}
