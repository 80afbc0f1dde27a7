//! Body transformation routes

use crate::error::ApiError;
use crate::services::coaching::CoachingService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitcoach_shared::transformation::{project, BodyMetrics, Projection, TransformationImage};

/// Create transformation routes
pub fn transformation_routes() -> Router<AppState> {
    Router::new()
        .route("/projection", post(projection))
        .route("/image", post(image))
}

/// POST /api/v1/transformation/projection - Expected changes and advice
async fn projection(Json(metrics): Json<BodyMetrics>) -> Result<Json<Projection>, ApiError> {
    Ok(Json(project(&metrics)?))
}

/// POST /api/v1/transformation/image - Projected physique image
///
/// A gateway failure is reported with `success: false`, not an error status.
async fn image(
    State(state): State<AppState>,
    Json(metrics): Json<BodyMetrics>,
) -> Result<Json<TransformationImage>, ApiError> {
    Ok(Json(
        CoachingService::transformation_image(state.model.as_ref(), &metrics).await?,
    ))
}
