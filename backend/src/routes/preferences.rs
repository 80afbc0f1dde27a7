//! User preferences API routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitcoach_shared::validation::validate_minutes;
use fitcoach_shared::{PreferencesUpdate, UserPreferences, ValidationError};
use serde::Serialize;

/// Create preferences routes
pub fn preferences_routes() -> Router<AppState> {
    Router::new().route("/", get(get_preferences).put(update_preferences))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreferencesResponse {
    #[serde(flatten)]
    preferences: UserPreferences,
    onboarding_complete: bool,
}

impl From<UserPreferences> for PreferencesResponse {
    fn from(preferences: UserPreferences) -> Self {
        Self {
            onboarding_complete: preferences.is_complete(),
            preferences,
        }
    }
}

/// GET /api/v1/preferences
async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    Json(state.context.preferences().await.into())
}

/// PUT /api/v1/preferences - Shallow-merge the given fields
async fn update_preferences(
    State(state): State<AppState>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    if let Some(time) = &update.time_availability {
        for (field, minutes) in [
            ("timeAvailability.workout", &time.workout),
            ("timeAvailability.mealPrep", &time.meal_prep),
        ] {
            if let Some(minutes) = minutes {
                validate_minutes(minutes).map_err(|msg| ValidationError::for_field(field, msg))?;
            }
        }
    }

    let preferences = state
        .context
        .update_preferences(|current| current.merge(update))
        .await;
    Ok(Json(preferences.into()))
}
