//! Route definitions for the FitCoach API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::str::FromStr;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod catalog;
mod health;
mod onboarding;
mod planner;
mod plans;
mod preferences;
mod progress;
mod reminders;
mod transformation;


pub use catalog::catalog_routes;
pub use onboarding::onboarding_routes;
pub use planner::planner_routes;
pub use plans::{chat_routes, feedback_routes, plans_routes};
pub use preferences::preferences_routes;
pub use progress::progress_routes;
pub use reminders::reminder_routes;
pub use transformation::transformation_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        // Gateway calls carry their own timeout; this bounds everything else
        .layer(TimeoutLayer::new(Duration::from_secs(90)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitCoach API v1" }))
        .nest("/preferences", preferences_routes())
        .nest("/onboarding", onboarding_routes())
        .nest("/catalog", catalog_routes())
        .nest("/planner", planner_routes())
        .nest("/plans", plans_routes())
        .nest("/feedback", feedback_routes())
        .nest("/chat", chat_routes())
        .nest("/progress", progress_routes())
        .nest("/reminders", reminder_routes())
        .nest("/transformation", transformation_routes())
}

/// Parse a day, slot or body part path segment
pub(crate) fn parse_path<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = String>,
{
    raw.parse().map_err(ApiError::BadRequest)
}
