//! Reminder routes
//!
//! Requests without a body use the stored settings.

use crate::error::ApiError;
use crate::services::reminders::ReminderService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitcoach_shared::reminders::{
    GeneratedReminders, ReminderPreview, ReminderSettings, ScheduleSummary,
};

/// Create reminder routes
pub fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/preview", post(preview))
        .route("/schedule", post(schedule))
        .route("/generate", post(generate))
}

async fn settings_or_stored(
    state: &AppState,
    body: Option<Json<ReminderSettings>>,
) -> ReminderSettings {
    match body {
        Some(Json(settings)) => settings,
        None => ReminderService::settings(state).await,
    }
}

/// GET /api/v1/reminders - Stored settings
async fn get_settings(State(state): State<AppState>) -> Json<ReminderSettings> {
    Json(ReminderService::settings(&state).await)
}

/// POST /api/v1/reminders/preview - Template previews for the settings
async fn preview(
    State(state): State<AppState>,
    body: Option<Json<ReminderSettings>>,
) -> Json<ReminderPreview> {
    let settings = settings_or_stored(&state, body).await;
    Json(ReminderService::preview(&state, &settings).await)
}

/// POST /api/v1/reminders/schedule - Validate and store the settings
async fn schedule(
    State(state): State<AppState>,
    Json(settings): Json<ReminderSettings>,
) -> Result<Json<ScheduleSummary>, ApiError> {
    Ok(Json(ReminderService::schedule(&state, settings).await?))
}

/// POST /api/v1/reminders/generate - AI-written reminders, or the defaults
async fn generate(
    State(state): State<AppState>,
    body: Option<Json<ReminderSettings>>,
) -> Json<GeneratedReminders> {
    let settings = settings_or_stored(&state, body).await;
    Json(ReminderService::generate(&state, &settings).await)
}
