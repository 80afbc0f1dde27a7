//! Weekly planner sessions
//!
//! A planner session starts from the saved week, collects edits in the
//! session registry and writes the week back through the application
//! context on save. Session locks are released before anything is
//! persisted.

use crate::error::ApiError;
use crate::state::AppState;
use fitcoach_shared::catalog::{catalog, BodyPart, Exercise, MealSlot};
use fitcoach_shared::planner::{
    CommitOutcome, Day, MealPlanner, MealWeek, SelectedExercise, WeeklyPlan, WorkoutPlanner,
    WorkoutWeek,
};
use fitcoach_shared::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Catalog exercise with its checked state in the current selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseChoice {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionView {
    pub id: Uuid,
    pub day: Day,
    pub category: BodyPart,
    pub choices: Vec<ExerciseChoice>,
    pub pending: Vec<SelectedExercise>,
    pub week: WorkoutWeek,
}

impl WorkoutSessionView {
    fn of(id: Uuid, planner: &WorkoutPlanner) -> Self {
        let selection = planner.selection();
        let choices = catalog()
            .exercises_for(selection.category())
            .map(|exercise| ExerciseChoice {
                checked: selection.is_checked(&exercise.id),
                exercise: exercise.clone(),
            })
            .collect();

        Self {
            id,
            day: planner.day(),
            category: selection.category(),
            choices,
            pending: selection.pending().to_vec(),
            week: planner.week().clone(),
        }
    }
}

/// Day or category change; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionUpdate {
    #[serde(default)]
    pub day: Option<Day>,
    #[serde(default)]
    pub category: Option<BodyPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResult {
    pub exercise_id: String,
    pub checked: bool,
    pub pending_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResult {
    #[serde(flatten)]
    pub outcome: CommitOutcome,
    pub title: &'static str,
    pub message: String,
    pub session: WorkoutSessionView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSessionView {
    pub id: Uuid,
    pub week: MealWeek,
    pub calories: WeeklyPlan<u32>,
}

impl MealSessionView {
    fn of(id: Uuid, planner: &MealPlanner) -> Self {
        let week = planner.week();
        let mut calories = WeeklyPlan::default();
        for day in Day::ALL {
            calories[day] = week.day_calories(day);
        }
        Self {
            id,
            week: week.clone(),
            calories,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub saved: bool,
    pub message: &'static str,
}

const WORKOUT_SAVED: &str = "Your weekly workout plan has been saved!";
const MEALS_SAVED: &str = "Your custom meal plan has been saved!";

const WORKOUT: &str = "Workout planner";
const MEALS: &str = "Meal planner";

pub struct PlannerService;

impl PlannerService {
    pub async fn start_workout(state: &AppState) -> WorkoutSessionView {
        let planner = WorkoutPlanner::with_week(state.context.weekly_workout().await);
        let id = state.workout_sessions.create(planner.clone()).await;
        debug!(session = %id, "Opened workout planner");
        WorkoutSessionView::of(id, &planner)
    }

    pub async fn workout(state: &AppState, id: Uuid) -> Result<WorkoutSessionView, ApiError> {
        state
            .workout_sessions
            .with(id, |planner| WorkoutSessionView::of(id, planner))
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))
    }

    pub async fn update_workout(
        state: &AppState,
        id: Uuid,
        update: WorkoutSessionUpdate,
    ) -> Result<WorkoutSessionView, ApiError> {
        state
            .workout_sessions
            .with(id, |planner| {
                if let Some(day) = update.day {
                    planner.select_day(day);
                }
                if let Some(category) = update.category {
                    planner.set_category(category);
                }
                WorkoutSessionView::of(id, planner)
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))
    }

    pub async fn toggle(
        state: &AppState,
        id: Uuid,
        exercise_id: &str,
    ) -> Result<ToggleResult, ApiError> {
        let result = state
            .workout_sessions
            .with(id, |planner| {
                planner.toggle(exercise_id).map(|checked| ToggleResult {
                    exercise_id: exercise_id.to_string(),
                    checked,
                    pending_count: planner.selection().pending_count(),
                })
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))?;
        Ok(result?)
    }

    pub async fn commit(state: &AppState, id: Uuid) -> Result<CommitResult, ApiError> {
        let result = state
            .workout_sessions
            .with(id, |planner| {
                let outcome = planner.commit();
                CommitResult {
                    title: outcome.title(),
                    message: outcome.message(),
                    outcome,
                    session: WorkoutSessionView::of(id, planner),
                }
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))?;

        if let CommitOutcome::Committed { day, count } = &result.outcome {
            info!(session = %id, day = %day, count, "Committed exercises");
        }
        Ok(result)
    }

    pub async fn remove_exercise(
        state: &AppState,
        id: Uuid,
        day: Day,
        instance_id: Uuid,
    ) -> Result<WorkoutSessionView, ApiError> {
        state
            .workout_sessions
            .with(id, |planner| {
                planner.remove(day, instance_id);
                WorkoutSessionView::of(id, planner)
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))
    }

    pub async fn summary(state: &AppState, id: Uuid) -> Result<WeeklyPlan<String>, ApiError> {
        state
            .workout_sessions
            .with(id, |planner| planner.summary())
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))
    }

    /// Persist the session's week and close the session
    pub async fn save_workout(state: &AppState, id: Uuid) -> Result<SaveResult, ApiError> {
        let week = state
            .workout_sessions
            .take(id, |planner| planner.validate_for_save().cloned())
            .await
            .ok_or_else(|| ApiError::session_not_found(WORKOUT, id))??;

        let exercises = week.exercise_count();
        state.context.set_weekly_workout(week).await;
        info!(session = %id, exercises, "Saved weekly workout plan");

        Ok(SaveResult {
            saved: true,
            message: WORKOUT_SAVED,
        })
    }

    pub async fn close_workout(state: &AppState, id: Uuid) -> Result<(), ApiError> {
        if !state.workout_sessions.remove(id).await {
            return Err(ApiError::session_not_found(WORKOUT, id));
        }
        debug!(session = %id, "Closed workout planner");
        Ok(())
    }

    pub async fn start_meals(state: &AppState) -> MealSessionView {
        let planner = MealPlanner::with_week(state.context.weekly_meals().await);
        let id = state.meal_sessions.create(planner.clone()).await;
        debug!(session = %id, "Opened meal planner");
        MealSessionView::of(id, &planner)
    }

    pub async fn meals(state: &AppState, id: Uuid) -> Result<MealSessionView, ApiError> {
        state
            .meal_sessions
            .with(id, |planner| MealSessionView::of(id, planner))
            .await
            .ok_or_else(|| ApiError::session_not_found(MEALS, id))
    }

    pub async fn assign_meal(
        state: &AppState,
        id: Uuid,
        day: Day,
        slot: MealSlot,
        meal_id: &str,
    ) -> Result<MealSessionView, ApiError> {
        let result = state
            .meal_sessions
            .with(id, |planner| {
                planner.assign(day, slot, meal_id)?;
                Ok::<_, ValidationError>(MealSessionView::of(id, planner))
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(MEALS, id))?;
        Ok(result?)
    }

    pub async fn clear_meal(
        state: &AppState,
        id: Uuid,
        day: Day,
        slot: MealSlot,
    ) -> Result<MealSessionView, ApiError> {
        state
            .meal_sessions
            .with(id, |planner| {
                planner.clear_slot(day, slot);
                MealSessionView::of(id, planner)
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(MEALS, id))
    }

    pub async fn save_meals(state: &AppState, id: Uuid) -> Result<SaveResult, ApiError> {
        let week = state
            .meal_sessions
            .take(id, |planner| planner.validate_for_save().cloned())
            .await
            .ok_or_else(|| ApiError::session_not_found(MEALS, id))??;

        state.context.set_weekly_meals(week).await;
        info!(session = %id, "Saved weekly meal plan");

        Ok(SaveResult {
            saved: true,
            message: MEALS_SAVED,
        })
    }

    pub async fn close_meals(state: &AppState, id: Uuid) -> Result<(), ApiError> {
        if !state.meal_sessions.remove(id).await {
            return Err(ApiError::session_not_found(MEALS, id));
        }
        debug!(session = %id, "Closed meal planner");
        Ok(())
    }
}
