//! Coaching service
//!
//! Wraps each AI gateway operation with its fallback policy. A failed
//! call (gateway disabled, network, non-2xx, unparseable or invalid reply)
//! is logged and replaced by built-in content; callers never see the
//! gateway error itself.

use crate::error::ApiError;
use crate::gateway::{prompts, CoachingModel};
use fitcoach_shared::reminders::{split_generated, GeneratedReminders, ReminderSettings};
use fitcoach_shared::reply::parse_structured;
use fitcoach_shared::samples::{sample_feedback, sample_recommendations};
use fitcoach_shared::transformation::{BodyMetrics, TransformationImage};
use fitcoach_shared::validation::validate_chat_message;
use fitcoach_shared::{
    Feedback, GatewayError, Progress, Recommendations, UserPreferences, ValidationError,
};
use serde::Serialize;
use tracing::{info, warn};

/// Apology shown when the assistant cannot answer
pub const CHAT_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Gateway output, flagged when it came from the built-in fallback
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Generated<T> {
    pub data: T,
    pub fallback: bool,
}

impl<T> Generated<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            fallback: false,
        }
    }

    fn fallback(data: T) -> Self {
        Self {
            data,
            fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub fallback: bool,
}

pub struct CoachingService;

impl CoachingService {
    /// Personalized nutrition and workout plans, or the sample plans
    pub async fn recommendations(
        model: &dyn CoachingModel,
        preferences: &UserPreferences,
    ) -> Generated<Recommendations> {
        let result = match model.complete(prompts::recommendations(preferences)).await {
            Ok(reply) => parse_structured::<Recommendations>(&reply),
            Err(e) => Err(e),
        };

        match result {
            Ok(recommendations) => {
                info!(
                    meals = recommendations.nutrition.daily_meals.len(),
                    exercises = recommendations.workout.exercises.len(),
                    "Generated recommendations"
                );
                Generated::live(recommendations)
            }
            Err(e) => {
                log_fallback("recommendations", &e);
                Generated::fallback(sample_recommendations())
            }
        }
    }

    /// Progress feedback, or the sample feedback
    pub async fn feedback(
        model: &dyn CoachingModel,
        preferences: &UserPreferences,
        progress: &Progress,
    ) -> Generated<Feedback> {
        let result = match model.complete(prompts::feedback(preferences, progress)).await {
            Ok(reply) => parse_structured::<Feedback>(&reply),
            Err(e) => Err(e),
        };

        match result {
            Ok(feedback) => Generated::live(feedback),
            Err(e) => {
                log_fallback("feedback", &e);
                Generated::fallback(sample_feedback())
            }
        }
    }

    /// Free-text assistant reply
    ///
    /// Blank or oversized messages are rejected before any gateway call.
    pub async fn chat(
        model: &dyn CoachingModel,
        message: &str,
        preferences: &UserPreferences,
    ) -> Result<ChatReply, ApiError> {
        validate_chat_message(message)
            .map_err(|msg| ValidationError::for_field("message", msg))?;

        let reply = match model.complete(prompts::chat(message.trim(), preferences)).await {
            Ok(reply) if !reply.trim().is_empty() => ChatReply {
                reply: reply.trim().to_string(),
                fallback: false,
            },
            Ok(_) => {
                log_fallback("chat", &GatewayError::EmptyResponse);
                apology()
            }
            Err(e) => {
                log_fallback("chat", &e);
                apology()
            }
        };
        Ok(reply)
    }

    /// Personalized reminder texts, or the fixed defaults
    pub async fn reminders(
        model: &dyn CoachingModel,
        preferences: &UserPreferences,
        settings: &ReminderSettings,
        progress: &Progress,
    ) -> GeneratedReminders {
        match model
            .complete(prompts::reminders(preferences, settings, progress))
            .await
        {
            Ok(reply) => split_generated(&reply),
            Err(e) => {
                log_fallback("reminders", &e);
                GeneratedReminders::fallback(e.to_string())
            }
        }
    }

    /// Projected-physique image; failures come back as a failed result
    pub async fn transformation_image(
        model: &dyn CoachingModel,
        metrics: &BodyMetrics,
    ) -> Result<TransformationImage, ApiError> {
        metrics.validate()?;

        let image = match model.generate_image(&metrics.image_prompt()).await {
            Ok(data) => TransformationImage::generated(data, metrics.timeframe_weeks),
            Err(e) => {
                log_fallback("transformation image", &e);
                TransformationImage::failed(e.to_string())
            }
        };
        Ok(image)
    }
}

fn apology() -> ChatReply {
    ChatReply {
        reply: CHAT_APOLOGY.to_string(),
        fallback: true,
    }
}

fn log_fallback(operation: &'static str, error: &GatewayError) {
    match error {
        GatewayError::Disabled => info!(operation, "AI gateway disabled, using fallback"),
        _ => warn!(operation, error = %error, "AI gateway failed, using fallback"),
    }
}
