//! Custom workouts built from the exercise library

use crate::error::ApiError;
use crate::state::AppState;
use fitcoach_shared::library::{library, CustomWorkoutBuilder, EntryEdit};
use fitcoach_shared::plans::Reps;
use fitcoach_shared::{ValidationError, WorkoutPlan};
use serde::Deserialize;
use tracing::info;

/// One library pick; omitted prescription values keep the defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPick {
    pub exercise_id: String,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<Reps>,
    #[serde(default)]
    pub rest_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomWorkoutRequest {
    pub exercises: Vec<CustomPick>,
}

pub struct LibraryService;

impl LibraryService {
    /// Build a workout from library picks and make it the current workout plan
    pub async fn save_custom_workout(
        state: &AppState,
        request: CustomWorkoutRequest,
    ) -> Result<WorkoutPlan, ApiError> {
        if request.exercises.is_empty() {
            return Err(ValidationError::for_field(
                "exercises",
                "Please add at least one exercise to your workout.",
            )
            .into());
        }

        let mut builder = CustomWorkoutBuilder::new();
        for pick in request.exercises {
            let exercise = library()
                .iter()
                .find(|e| e.id == pick.exercise_id)
                .ok_or_else(|| {
                    ValidationError::for_field(
                        "exerciseId",
                        format!("Unknown exercise: {}", pick.exercise_id),
                    )
                })?;

            let entry = builder.add(exercise);
            let edits = [
                pick.sets.map(EntryEdit::Sets),
                pick.reps.map(EntryEdit::Reps),
                pick.rest_time.map(EntryEdit::RestTime),
            ];
            for edit in edits.into_iter().flatten() {
                builder.edit(entry, edit);
            }
        }

        let (_, current) = state.context.plans().await;
        let plan = builder.build(current.as_ref());
        validator::Validate::validate(&plan).map_err(|e| {
            ValidationError::for_field("exercises", format!("Invalid workout: {}", e))
        })?;

        state.context.set_workout_plan(plan.clone()).await;
        info!(exercises = plan.exercises.len(), "Saved custom workout plan");
        Ok(plan)
    }
}
