//! Reminder settings, template previews and scheduling
//!
//! Scheduling is simulated: it validates the settings and reports how
//! many notifications would be delivered each week.

use crate::errors::ValidationError;
use crate::models::UserPreferences;
use crate::progress::Progress;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_WORKOUT_REMINDER: &str =
    "Time for your workout! 💪 Stay consistent to reach your goals.";
pub const DEFAULT_MEAL_REMINDER: &str =
    "Don't forget your nutrition! 🥗 Proper fuel powers your fitness journey.";

const HEALTH_TIPS: [&str; 4] = [
    "Drinking water before meals can help reduce calorie intake.",
    "Taking short active breaks during work improves productivity and health.",
    "Getting 7-9 hours of sleep improves workout recovery and performance.",
    "Adding 5 minutes of stretching after workouts can improve flexibility by 30%.",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    #[default]
    Workout,
    Meal,
    Both,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MotivationStyle {
    #[default]
    Encouraging,
    Challenge,
    Scientific,
    Mindful,
}

impl MotivationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationStyle::Encouraging => "encouraging",
            MotivationStyle::Challenge => "challenge",
            MotivationStyle::Scientific => "scientific",
            MotivationStyle::Mindful => "mindful",
        }
    }

    fn line(&self) -> &'static str {
        match self {
            MotivationStyle::Encouraging => "You're making great progress! Every workout counts.",
            MotivationStyle::Challenge => {
                "Push yourself today - can you beat your last performance?"
            }
            MotivationStyle::Scientific => {
                "Research shows consistent exercise leads to 20% better long-term health outcomes."
            }
            MotivationStyle::Mindful => {
                "Focus on how good your body feels during and after your workout today."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderTone {
    #[default]
    Friendly,
    Motivational,
    Professional,
    Humorous,
}

impl ReminderTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderTone::Friendly => "friendly",
            ReminderTone::Motivational => "motivational",
            ReminderTone::Professional => "professional",
            ReminderTone::Humorous => "humorous",
        }
    }

    fn greeting(&self) -> &'static str {
        match self {
            ReminderTone::Friendly => "Hey there! 👋",
            ReminderTone::Motivational => "Let's crush it today! 💪",
            ReminderTone::Professional => "Good day,",
            ReminderTone::Humorous => "Guess what time it is? 🕒",
        }
    }
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time")
}

/// Reminder preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub enabled: bool,
    #[serde(default)]
    pub frequency: Frequency,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub selected_days: BTreeSet<u8>,
    #[serde(default = "default_time")]
    pub time: NaiveTime,
    #[serde(default)]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub motivation_style: MotivationStyle,
    #[serde(default)]
    pub tone: ReminderTone,
    #[serde(default = "enabled_by_default")]
    pub include_health_tips: bool,
    #[serde(default = "enabled_by_default")]
    pub include_progress_stats: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: Frequency::Daily,
            selected_days: [1, 3, 5].into_iter().collect(),
            time: default_time(),
            notification_type: NotificationType::Workout,
            motivation_style: MotivationStyle::Encouraging,
            tone: ReminderTone::Friendly,
            include_health_tips: true,
            include_progress_stats: true,
        }
    }
}

impl ReminderSettings {
    pub fn toggle_day(&mut self, day: u8) {
        if !self.selected_days.remove(&day) {
            self.selected_days.insert(day);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let days: Vec<u8> = self.selected_days.iter().copied().collect();
        crate::validation::validate_reminder_days(&days)
            .map_err(|msg| ValidationError::for_field("selectedDays", msg))?;

        if self.enabled && self.frequency == Frequency::Weekly && self.selected_days.is_empty() {
            return Err(ValidationError::for_field(
                "selectedDays",
                "Please select at least one day for notifications",
            ));
        }
        Ok(())
    }

    /// Notifications delivered per week
    pub fn scheduled_count(&self) -> usize {
        if !self.enabled {
            return 0;
        }
        let days = match self.frequency {
            Frequency::Daily => 7,
            Frequency::Weekly => self.selected_days.len(),
        };
        let per_day = match self.notification_type {
            NotificationType::Both => 2,
            _ => 1,
        };
        days * per_day
    }

    /// Selected day names, Sunday first
    pub fn day_names(&self) -> Vec<&'static str> {
        self.selected_days
            .iter()
            .filter_map(|d| DAY_NAMES.get(usize::from(*d)).copied())
            .collect()
    }
}

/// Result of a (simulated) scheduling request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub scheduled_count: usize,
    pub notification_type: NotificationType,
    pub frequency: Frequency,
    pub message: String,
}

pub fn schedule(settings: &ReminderSettings) -> Result<ScheduleSummary, ValidationError> {
    settings.validate()?;

    let scheduled_count = settings.scheduled_count();
    let message = if settings.enabled {
        format!("Successfully scheduled {} AI-powered reminders.", scheduled_count)
    } else {
        "You have chosen not to receive workout reminders.".to_string()
    };

    Ok(ScheduleSummary {
        scheduled_count,
        notification_type: settings.notification_type,
        frequency: settings.frequency,
        message,
    })
}

/// Workout and meal reminder text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreview {
    pub workout_reminder: String,
    pub meal_reminder: String,
}

fn goal_text(preferences: &UserPreferences) -> String {
    preferences
        .goal
        .map(|g| g.phrase())
        .unwrap_or_else(|| "fitness".to_string())
}

fn meal_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "breakfast",
        12..=16 => "lunch",
        _ => "dinner",
    }
}

/// Template previews; the tip rotates with the day of the year
pub fn preview(
    settings: &ReminderSettings,
    preferences: &UserPreferences,
    progress: &Progress,
    now: NaiveDateTime,
) -> ReminderPreview {
    use chrono::Datelike;

    let greeting = settings.tone.greeting();
    let goal = goal_text(preferences);
    let tip = if settings.include_health_tips {
        let tip = HEALTH_TIPS[now.ordinal0() as usize % HEALTH_TIPS.len()];
        format!("\n\nTIP: {}", tip)
    } else {
        String::new()
    };
    let stats = if settings.include_progress_stats {
        format!(
            "\n\nYour stats: {} workouts completed | {} meals on plan ({}% complete)",
            progress.workouts_completed,
            progress.meals_followed,
            progress.completion_percentage()
        )
    } else {
        String::new()
    };

    let workout_reminder = format!(
        "{} Time for your {} workout!\n\n{}{}{}\n\n🏋️ TAP TO OPEN YOUR WORKOUT PLAN",
        greeting,
        goal,
        settings.motivation_style.line(),
        tip,
        stats
    );

    let importance = match settings.motivation_style {
        MotivationStyle::Scientific => "scientifically proven to be",
        _ => "just as",
    };
    let meal_reminder = format!(
        "{} Don't forget your {}!\n\nEating well is {} important as exercise for your {} goals.{}\n\n🥗 TAP TO SEE YOUR MEAL PLAN",
        greeting,
        meal_for_hour(now.hour()),
        importance,
        goal,
        tip
    );

    ReminderPreview {
        workout_reminder,
        meal_reminder,
    }
}

/// Reminders produced by the AI gateway, or the fixed defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReminders {
    pub success: bool,
    pub workout_reminder: String,
    pub meal_reminder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeneratedReminders {
    pub fn fallback(error: impl Into<String>) -> Self {
        Self {
            success: false,
            workout_reminder: DEFAULT_WORKOUT_REMINDER.to_string(),
            meal_reminder: DEFAULT_MEAL_REMINDER.to_string(),
            error: Some(error.into()),
        }
    }
}

static WORKOUT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Workout Reminder:(.*?)(?:Meal Reminder:|\z)")
        .expect("workout section pattern is valid")
});

static MEAL_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Meal Reminder:(.*)\z").expect("meal section pattern is valid")
});

fn section(pattern: &Regex, reply: &str) -> Option<String> {
    pattern
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Split a model reply on its reminder markers; missing parts use the defaults
pub fn split_generated(reply: &str) -> GeneratedReminders {
    GeneratedReminders {
        success: true,
        workout_reminder: section(&WORKOUT_SECTION, reply)
            .unwrap_or_else(|| DEFAULT_WORKOUT_REMINDER.to_string()),
        meal_reminder: section(&MEAL_SECTION, reply)
            .unwrap_or_else(|| DEFAULT_MEAL_REMINDER.to_string()),
        error: None,
    }
}
