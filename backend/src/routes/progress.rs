//! Progress tracking routes

use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use fitcoach_shared::Progress;
use serde::Serialize;
use tracing::info;

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_progress))
        .route("/workout", post(record_workout))
        .route("/meal", post(record_meal))
        .route("/reset", post(reset_progress))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressResponse {
    #[serde(flatten)]
    progress: Progress,
    completion_percentage: u32,
}

impl From<Progress> for ProgressResponse {
    fn from(progress: Progress) -> Self {
        Self {
            completion_percentage: progress.completion_percentage(),
            progress,
        }
    }
}

async fn get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    Json(state.context.progress().await.into())
}

/// POST /api/v1/progress/workout - Count one completed workout
async fn record_workout(State(state): State<AppState>) -> Json<ProgressResponse> {
    let progress = state
        .context
        .update_progress(|p| p.record_workout(Utc::now()))
        .await;
    Json(progress.into())
}

/// POST /api/v1/progress/meal - Count one meal followed
async fn record_meal(State(state): State<AppState>) -> Json<ProgressResponse> {
    let progress = state
        .context
        .update_progress(|p| p.record_meal(Utc::now()))
        .await;
    Json(progress.into())
}

async fn reset_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let progress = state.context.reset_progress().await;
    info!("Progress reset");
    Json(progress.into())
}
