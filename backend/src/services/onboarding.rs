//! Onboarding sessions

use crate::error::ApiError;
use crate::state::AppState;
use fitcoach_shared::onboarding::{
    FormEdit, OnboardingError, OnboardingForm, OnboardingStep, OnboardingWizard,
};
use fitcoach_shared::UserPreferences;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

const ONBOARDING: &str = "Onboarding";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    pub id: Uuid,
    pub step: OnboardingStep,
    pub step_index: usize,
    pub step_count: usize,
    pub form: OnboardingForm,
}

impl OnboardingView {
    fn of(id: Uuid, wizard: &OnboardingWizard) -> Self {
        Self {
            id,
            step: wizard.step(),
            step_index: wizard.step().index(),
            step_count: OnboardingStep::ALL.len(),
            form: wizard.form().clone(),
        }
    }
}

pub struct OnboardingService;

impl OnboardingService {
    pub async fn start(state: &AppState) -> OnboardingView {
        let wizard = OnboardingWizard::new();
        let id = state.onboarding_sessions.create(wizard.clone()).await;
        debug!(session = %id, "Started onboarding");
        OnboardingView::of(id, &wizard)
    }

    pub async fn view(state: &AppState, id: Uuid) -> Result<OnboardingView, ApiError> {
        state
            .onboarding_sessions
            .with(id, |wizard| OnboardingView::of(id, wizard))
            .await
            .ok_or_else(|| ApiError::session_not_found(ONBOARDING, id))
    }

    pub async fn edit(
        state: &AppState,
        id: Uuid,
        edit: FormEdit,
    ) -> Result<OnboardingView, ApiError> {
        state
            .onboarding_sessions
            .with(id, |wizard| {
                wizard.edit(edit);
                OnboardingView::of(id, wizard)
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(ONBOARDING, id))
    }

    pub async fn next(state: &AppState, id: Uuid) -> Result<OnboardingView, ApiError> {
        let view = state
            .onboarding_sessions
            .with(id, |wizard| {
                wizard.next().map(|_| OnboardingView::of(id, wizard))
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(ONBOARDING, id))?;
        Ok(view?)
    }

    pub async fn back(state: &AppState, id: Uuid) -> Result<OnboardingView, ApiError> {
        state
            .onboarding_sessions
            .with(id, |wizard| {
                wizard.back();
                OnboardingView::of(id, wizard)
            })
            .await
            .ok_or_else(|| ApiError::session_not_found(ONBOARDING, id))
    }

    /// Merge the answers into the stored preferences and close the session
    ///
    /// The session is closed in the same step that confirms it is at
    /// review, so a concurrent `back` either lands first (and this returns
    /// 409 with the session still open) or finds the session gone.
    pub async fn complete(state: &AppState, id: Uuid) -> Result<UserPreferences, ApiError> {
        let wizard = state
            .onboarding_sessions
            .take(id, |wizard| wizard.ensure_completable().map(|_| wizard.clone()))
            .await
            .ok_or_else(|| ApiError::session_not_found(ONBOARDING, id))??;

        let preferences = state
            .context
            .try_update_preferences(|current| {
                *current = wizard.complete(current)?;
                Ok::<_, OnboardingError>(())
            })
            .await?;

        info!(session = %id, goal = ?preferences.goal, "Completed onboarding");
        Ok(preferences)
    }

    /// Abandon the wizard without touching stored preferences
    pub async fn close(state: &AppState, id: Uuid) -> Result<(), ApiError> {
        if !state.onboarding_sessions.remove(id).await {
            return Err(ApiError::session_not_found(ONBOARDING, id));
        }
        debug!(session = %id, "Closed onboarding");
        Ok(())
    }
}
