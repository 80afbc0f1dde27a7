//! Generated plans, progress feedback and chat routes

use crate::error::ApiError;
use crate::services::coaching::{ChatReply, CoachingService, Generated};
use crate::services::plans::{PlanService, PlansView};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitcoach_shared::Feedback;
use serde::Deserialize;

/// Create plan routes
pub fn plans_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(current_plans))
        .route("/refresh", post(refresh_plans))
}

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/", get(feedback))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", post(chat))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// GET /api/v1/plans - Stored plans, generated on first use
async fn current_plans(State(state): State<AppState>) -> Json<PlansView> {
    Json(PlanService::current(&state.context, state.model.as_ref()).await)
}

/// POST /api/v1/plans/refresh
async fn refresh_plans(State(state): State<AppState>) -> Json<PlansView> {
    Json(PlanService::refresh(&state.context, state.model.as_ref()).await)
}

/// GET /api/v1/feedback
async fn feedback(State(state): State<AppState>) -> Json<Generated<Feedback>> {
    Json(PlanService::feedback(&state.context, state.model.as_ref()).await)
}

/// POST /api/v1/chat
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let preferences = state.context.preferences().await;
    Ok(Json(
        CoachingService::chat(state.model.as_ref(), &req.message, &preferences).await?,
    ))
}
