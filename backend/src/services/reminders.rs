//! Reminder settings, previews and AI-written reminders
//!
//! Nothing is delivered to a device; scheduling validates and stores the
//! settings and reports what would be sent.

use super::coaching::CoachingService;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::keys;
use chrono::Local;
use fitcoach_shared::reminders::{
    preview, schedule, GeneratedReminders, ReminderPreview, ReminderSettings, ScheduleSummary,
};
use tracing::info;

pub struct ReminderService;

impl ReminderService {
    pub async fn settings(state: &AppState) -> ReminderSettings {
        state
            .store()
            .load_or(keys::REMINDER_SETTINGS, ReminderSettings::default())
            .await
    }

    pub async fn preview(state: &AppState, settings: &ReminderSettings) -> ReminderPreview {
        let preferences = state.context.preferences().await;
        let progress = state.context.progress().await;
        preview(settings, &preferences, &progress, Local::now().naive_local())
    }

    /// Validate and store the settings
    pub async fn schedule(
        state: &AppState,
        settings: ReminderSettings,
    ) -> Result<ScheduleSummary, ApiError> {
        let summary = schedule(&settings)?;
        state
            .store()
            .save(keys::REMINDER_SETTINGS, &settings)
            .await;
        info!(
            scheduled = summary.scheduled_count,
            enabled = settings.enabled,
            "Scheduled reminders"
        );
        Ok(summary)
    }

    pub async fn generate(state: &AppState, settings: &ReminderSettings) -> GeneratedReminders {
        let preferences = state.context.preferences().await;
        let progress = state.context.progress().await;
        CoachingService::reminders(state.model.as_ref(), &preferences, settings, &progress).await
    }
}
