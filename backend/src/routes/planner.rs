//! Weekly workout and meal planner routes

use super::parse_path;
use crate::error::ApiError;
use crate::services::planner::{
    CommitResult, MealSessionView, PlannerService, SaveResult, ToggleResult, WorkoutSessionUpdate,
    WorkoutSessionView,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use fitcoach_shared::planner::{Day, WeeklyPlan};
use serde::Deserialize;
use uuid::Uuid;

/// Create planner routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/workout", post(start_workout))
        .route(
            "/workout/:id",
            get(get_workout).patch(update_workout).delete(close_workout),
        )
        .route("/workout/:id/toggle", post(toggle))
        .route("/workout/:id/commit", post(commit))
        .route("/workout/:id/save", post(save_workout))
        .route("/workout/:id/summary", get(summary))
        .route("/workout/:id/days/:day/:instance", delete(remove_exercise))
        .route("/meals", post(start_meals))
        .route("/meals/:id", get(get_meals).delete(close_meals))
        .route("/meals/:id/days/:day/:slot", put(assign_meal).delete(clear_meal))
        .route("/meals/:id/save", post(save_meals))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleRequest {
    exercise_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignMealRequest {
    meal_id: String,
}

/// POST /api/v1/planner/workout - Open a planner on the saved week
async fn start_workout(State(state): State<AppState>) -> (StatusCode, Json<WorkoutSessionView>) {
    (
        StatusCode::CREATED,
        Json(PlannerService::start_workout(&state).await),
    )
}

async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutSessionView>, ApiError> {
    Ok(Json(PlannerService::workout(&state, id).await?))
}

/// PATCH /api/v1/planner/workout/:id - Select day and/or category
async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<WorkoutSessionUpdate>,
) -> Result<Json<WorkoutSessionView>, ApiError> {
    Ok(Json(PlannerService::update_workout(&state, id, update).await?))
}

async fn close_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    PlannerService::close_workout(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResult>, ApiError> {
    Ok(Json(PlannerService::toggle(&state, id, &req.exercise_id).await?))
}

/// POST /api/v1/planner/workout/:id/commit - Add pending exercises to the selected day
///
/// Committing nothing is reported in the body, not as an error.
async fn commit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommitResult>, ApiError> {
    Ok(Json(PlannerService::commit(&state, id).await?))
}

async fn save_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaveResult>, ApiError> {
    Ok(Json(PlannerService::save_workout(&state, id).await?))
}

async fn summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WeeklyPlan<String>>, ApiError> {
    Ok(Json(PlannerService::summary(&state, id).await?))
}

async fn remove_exercise(
    State(state): State<AppState>,
    Path((id, day, instance)): Path<(Uuid, String, Uuid)>,
) -> Result<Json<WorkoutSessionView>, ApiError> {
    let day: Day = parse_path(&day)?;
    Ok(Json(
        PlannerService::remove_exercise(&state, id, day, instance).await?,
    ))
}

/// POST /api/v1/planner/meals - Open a meal planner on the saved week
async fn start_meals(State(state): State<AppState>) -> (StatusCode, Json<MealSessionView>) {
    (
        StatusCode::CREATED,
        Json(PlannerService::start_meals(&state).await),
    )
}

async fn get_meals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MealSessionView>, ApiError> {
    Ok(Json(PlannerService::meals(&state, id).await?))
}

async fn close_meals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    PlannerService::close_meals(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/planner/meals/:id/days/:day/:slot - Overwrite one slot
async fn assign_meal(
    State(state): State<AppState>,
    Path((id, day, slot)): Path<(Uuid, String, String)>,
    Json(req): Json<AssignMealRequest>,
) -> Result<Json<MealSessionView>, ApiError> {
    let day = parse_path(&day)?;
    let slot = parse_path(&slot)?;
    Ok(Json(
        PlannerService::assign_meal(&state, id, day, slot, &req.meal_id).await?,
    ))
}

async fn clear_meal(
    State(state): State<AppState>,
    Path((id, day, slot)): Path<(Uuid, String, String)>,
) -> Result<Json<MealSessionView>, ApiError> {
    let day = parse_path(&day)?;
    let slot = parse_path(&slot)?;
    Ok(Json(PlannerService::clear_meal(&state, id, day, slot).await?))
}

async fn save_meals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaveResult>, ApiError> {
    Ok(Json(PlannerService::save_meals(&state, id).await?))
}
