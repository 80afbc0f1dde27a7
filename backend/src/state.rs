//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. Every field is an `Arc` (or wraps one), so cloning per
//! request is O(1).

use crate::config::AppConfig;
use crate::gateway::CoachingModel;
use crate::services::context::AppContext;
use crate::services::sessions::SessionRegistry;
use crate::store::PreferenceStore;
use fitcoach_shared::onboarding::OnboardingWizard;
use fitcoach_shared::planner::{MealPlanner, WorkoutPlanner};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// User data and its update entry points
    pub context: Arc<AppContext>,
    /// AI gateway (or the disabled stand-in)
    pub model: Arc<dyn CoachingModel>,
    pub workout_sessions: Arc<SessionRegistry<WorkoutPlanner>>,
    pub meal_sessions: Arc<SessionRegistry<MealPlanner>>,
    pub onboarding_sessions: Arc<SessionRegistry<OnboardingWizard>>,
}

impl AppState {
    /// Create the state, loading persisted user data from `store`
    pub async fn new(
        config: AppConfig,
        store: PreferenceStore,
        model: Arc<dyn CoachingModel>,
    ) -> Self {
        let context = AppContext::load(store).await;
        let idle = config.sessions.idle_timeout();

        Self {
            config: Arc::new(config),
            context: Arc::new(context),
            model,
            workout_sessions: Arc::new(SessionRegistry::with_idle_timeout(idle)),
            meal_sessions: Arc::new(SessionRegistry::with_idle_timeout(idle)),
            onboarding_sessions: Arc::new(SessionRegistry::with_idle_timeout(idle)),
        }
    }

    #[inline]
    pub fn store(&self) -> &PreferenceStore {
        self.context.store()
    }
}
