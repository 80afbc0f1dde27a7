//! Exercise catalog, meal catalog and exercise library routes

use super::parse_path;
use crate::error::ApiError;
use crate::services::library::{CustomWorkoutRequest, LibraryService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use fitcoach_shared::catalog::{catalog, BodyPart, Exercise, Meal, MealSlot};
use fitcoach_shared::library::{library, LibraryExercise, LibraryFilter};
use fitcoach_shared::WorkoutPlan;
use serde::Deserialize;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/meals", get(list_meals))
        .route("/library", get(search_library))
        .route("/library/workout", post(save_custom_workout))
}

#[derive(Debug, Deserialize)]
struct ExerciseQuery {
    #[serde(rename = "bodyPart")]
    body_part: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MealQuery {
    slot: Option<String>,
}

/// GET /api/v1/catalog/exercises?bodyPart=chest
async fn list_exercises(
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = match query.body_part.as_deref() {
        Some(raw) => {
            let body_part: BodyPart = parse_path(raw)?;
            catalog().exercises_for(body_part).cloned().collect()
        }
        None => catalog().exercises().to_vec(),
    };
    Ok(Json(exercises))
}

/// GET /api/v1/catalog/meals?slot=breakfast
async fn list_meals(Query(query): Query<MealQuery>) -> Result<Json<Vec<Meal>>, ApiError> {
    let meals = match query.slot.as_deref() {
        Some(raw) => {
            let slot: MealSlot = parse_path(raw)?;
            catalog().meals_for(slot).cloned().collect()
        }
        None => catalog().meals().to_vec(),
    };
    Ok(Json(meals))
}

/// GET /api/v1/catalog/library?query=push&category=all&muscle=Chest
async fn search_library(Query(filter): Query<LibraryFilter>) -> Json<Vec<LibraryExercise>> {
    Json(filter.apply(library()).into_iter().cloned().collect())
}

/// POST /api/v1/catalog/library/workout - Replace the workout plan with library picks
async fn save_custom_workout(
    State(state): State<AppState>,
    Json(request): Json<CustomWorkoutRequest>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    Ok(Json(LibraryService::save_custom_workout(&state, request).await?))
}
