//! Onboarding wizard API routes

use crate::error::ApiError;
use crate::services::onboarding::{OnboardingService, OnboardingView};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitcoach_shared::onboarding::FormEdit;
use fitcoach_shared::UserPreferences;
use uuid::Uuid;

/// Create onboarding routes
pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(start))
        .route("/:id", get(view).patch(edit).delete(close))
        .route("/:id/next", post(next))
        .route("/:id/back", post(back))
        .route("/:id/complete", post(complete))
}

/// POST /api/v1/onboarding - Start a new wizard
async fn start(State(state): State<AppState>) -> (StatusCode, Json<OnboardingView>) {
    (StatusCode::CREATED, Json(OnboardingService::start(&state).await))
}

async fn view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OnboardingView>, ApiError> {
    Ok(Json(OnboardingService::view(&state, id).await?))
}

/// PATCH /api/v1/onboarding/:id - Update answers without moving
async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<FormEdit>,
) -> Result<Json<OnboardingView>, ApiError> {
    Ok(Json(OnboardingService::edit(&state, id, edit).await?))
}

async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OnboardingView>, ApiError> {
    Ok(Json(OnboardingService::next(&state, id).await?))
}

async fn back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OnboardingView>, ApiError> {
    Ok(Json(OnboardingService::back(&state, id).await?))
}

/// POST /api/v1/onboarding/:id/complete - Save answers; closes the wizard
async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserPreferences>, ApiError> {
    Ok(Json(OnboardingService::complete(&state, id).await?))
}

/// DELETE /api/v1/onboarding/:id - Abandon the wizard
async fn close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    OnboardingService::close(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
