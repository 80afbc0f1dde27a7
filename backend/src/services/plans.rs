//! Generated plan service

use super::coaching::{CoachingService, Generated};
use super::context::AppContext;
use crate::gateway::CoachingModel;
use fitcoach_shared::{Feedback, NutritionPlan, WorkoutPlan};
use serde::Serialize;
use tracing::info;

/// Current nutrition and workout plans
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlansView {
    pub nutrition: NutritionPlan,
    pub workout: WorkoutPlan,
    /// True when the plans are the built-in samples
    pub fallback: bool,
    /// False when the result was discarded because preferences changed meanwhile
    pub applied: bool,
}

pub struct PlanService;

impl PlanService {
    /// Stored plans, generating them when none exist yet
    pub async fn current(context: &AppContext, model: &dyn CoachingModel) -> PlansView {
        if let (Some(nutrition), Some(workout)) = context.plans().await {
            return PlansView {
                nutrition,
                workout,
                fallback: false,
                applied: true,
            };
        }
        Self::refresh(context, model).await
    }

    /// Generate fresh plans from the current preferences
    ///
    /// The result is stored only if preferences and progress were not
    /// changed while the gateway call was in flight.
    pub async fn refresh(context: &AppContext, model: &dyn CoachingModel) -> PlansView {
        let generation = context.generation().await;
        let preferences = context.preferences().await;

        let Generated { data, fallback } =
            CoachingService::recommendations(model, &preferences).await;
        let applied = context.apply_recommendations(generation, data.clone()).await;

        info!(fallback, applied, "Refreshed plans");
        PlansView {
            nutrition: data.nutrition,
            workout: data.workout,
            fallback,
            applied,
        }
    }

    pub async fn feedback(context: &AppContext, model: &dyn CoachingModel) -> Generated<Feedback> {
        let preferences = context.preferences().await;
        let progress = context.progress().await;
        CoachingService::feedback(model, &preferences, &progress).await
    }
}
