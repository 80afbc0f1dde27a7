//! Prompt construction for each gateway operation

use super::CompletionRequest;
use fitcoach_shared::progress::Progress;
use fitcoach_shared::reminders::ReminderSettings;
use fitcoach_shared::UserPreferences;

const NOT_SPECIFIED: &str = "Not specified";

const PLAN_SYSTEM: &str = "You are a professional fitness and nutrition coach that creates personalized plans. Always provide your response in valid JSON format. Make your recommendations specific, actionable, and based on scientific evidence.";

const FEEDBACK_SYSTEM: &str = "You are a supportive fitness and nutrition coach providing personalized feedback. Always respond in valid JSON format with encouraging, actionable advice.";

const PLAN_SCHEMA: &str = r#"{
  "nutrition": {
    "dailyMeals": [
      {
        "name": "meal name",
        "description": "brief description",
        "ingredients": ["ingredient1", "ingredient2"],
        "prepTime": "time in minutes",
        "nutritionFacts": {"calories": 0, "protein": "0g", "carbs": "0g", "fats": "0g"}
      }
    ],
    "tips": ["tip1", "tip2"]
  },
  "workout": {
    "name": "workout name",
    "duration": "time in minutes",
    "exercises": [
      {
        "name": "exercise name",
        "sets": 0,
        "reps": 0,
        "restTime": "time in seconds",
        "description": "how to perform"
      }
    ],
    "tips": ["tip1", "tip2"]
  }
}"#;

const FEEDBACK_SCHEMA: &str = r#"{
  "feedback": "encouraging message",
  "suggestions": ["suggestion1", "suggestion2"],
  "nextSteps": "what to focus on next"
}"#;

fn or_unspecified(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_SPECIFIED)
}

fn dietary(preferences: &UserPreferences) -> String {
    if preferences.dietary_preferences.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        preferences.dietary_list()
    }
}

pub fn recommendations(preferences: &UserPreferences) -> CompletionRequest {
    let time = &preferences.time_availability;
    let user = format!(
        "Based on the following user preferences, generate personalized nutrition and workout recommendations:\n\n\
         Fitness Goal: {}\n\
         Fitness Level: {}\n\
         Available Equipment: {}\n\
         Dietary Preferences: {}\n\
         Time Available for Workouts: {} minutes\n\
         Time Available for Meal Prep: {} minutes\n\n\
         Format the response as JSON with the following structure:\n{}",
        or_unspecified(preferences.goal.map(|g| g.as_str())),
        or_unspecified(preferences.fitness_level.map(|l| l.as_str())),
        or_unspecified(preferences.equipment.map(|e| e.as_str())),
        dietary(preferences),
        or_unspecified(time.workout.as_deref()),
        or_unspecified(time.meal_prep.as_deref()),
        PLAN_SCHEMA,
    );

    CompletionRequest {
        system: PLAN_SYSTEM.to_string(),
        user,
        temperature: 0.7,
        max_tokens: 1000,
    }
}

pub fn feedback(preferences: &UserPreferences, progress: &Progress) -> CompletionRequest {
    let last_updated = progress
        .last_updated
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "never".to_string());
    let user = format!(
        "Based on the user's progress and preferences, provide encouraging feedback and suggestions for improvement:\n\n\
         User Progress:\n\
         Workouts Completed: {}\n\
         Meals Followed: {}\n\
         Last Updated: {}\n\n\
         User Goals: {}\n\n\
         Format the response as JSON with the following structure:\n{}",
        progress.workouts_completed,
        progress.meals_followed,
        last_updated,
        or_unspecified(preferences.goal.map(|g| g.as_str())),
        FEEDBACK_SCHEMA,
    );

    CompletionRequest {
        system: FEEDBACK_SYSTEM.to_string(),
        user,
        temperature: 0.7,
        max_tokens: 600,
    }
}

pub fn chat(message: &str, preferences: &UserPreferences) -> CompletionRequest {
    let system = format!(
        "You are a friendly and supportive AI fitness and nutrition coach named FitCoach.\n\
         You provide personalized advice based on the user's profile and goals. Be conversational, helpful, and encouraging.\n\n\
         User Profile:\n\
         Fitness Goal: {}\n\
         Fitness Level: {}\n\
         Available Equipment: {}\n\
         Dietary Preferences: {}\n\n\
         When giving advice, focus on:\n\
         1. Being positive and motivational\n\
         2. Providing evidence-based information\n\
         3. Tailoring responses to the user's specific goals and fitness level\n\
         4. Suggesting specific, actionable steps\n\
         5. Acknowledging challenges while offering solutions\n\n\
         Your tone should be conversational but professional.",
        or_unspecified(preferences.goal.map(|g| g.as_str())),
        or_unspecified(preferences.fitness_level.map(|l| l.as_str())),
        or_unspecified(preferences.equipment.map(|e| e.as_str())),
        dietary(preferences),
    );

    CompletionRequest {
        system,
        user: message.to_string(),
        temperature: 0.8,
        max_tokens: 800,
    }
}

pub fn reminders(
    preferences: &UserPreferences,
    settings: &ReminderSettings,
    progress: &Progress,
) -> CompletionRequest {
    let system = format!(
        "You are FitCoach AI, a personalized fitness assistant that creates engaging reminders.\n\n\
         Generate two separate reminders: one for workouts and one for meals.\n\
         Make these reminders personalized to the user's fitness goals, preferences, and current progress.\n\n\
         User fitness goal: {}\n\
         User fitness level: {}\n\
         Motivation style: {}\n\
         Tone of voice: {}\n\
         {}\n\
         {}\n\n\
         Current progress:\n\
         - Workouts completed: {}\n\
         - Meals on plan: {}\n\n\
         Please format each reminder to be concise (under 200 characters) but motivating, and end with a call to action.\n\
         Each reminder should feel like a mobile push notification.\n\
         Start the workout reminder with \"Workout Reminder:\" and the meal reminder with \"Meal Reminder:\".",
        preferences
            .goal
            .map(|g| g.as_str())
            .unwrap_or("general fitness improvement"),
        preferences
            .fitness_level
            .map(|l| l.as_str())
            .unwrap_or("intermediate"),
        settings.motivation_style.as_str(),
        settings.tone.as_str(),
        if settings.include_health_tips {
            "Include a relevant health tip."
        } else {
            "Do not include health tips."
        },
        if settings.include_progress_stats {
            "Include a brief mention of their progress stats."
        } else {
            "Do not include progress stats."
        },
        progress.workouts_completed,
        progress.meals_followed,
    );

    CompletionRequest {
        system,
        user: "Generate workout and meal reminders for today based on my preferences.".to_string(),
        temperature: 0.7,
        max_tokens: 600,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcoach_shared::models::{DietaryPreference, FitnessGoal, FitnessLevel};

    #[test]
    fn test_recommendations_prompt_embeds_profile() {
        let preferences = UserPreferences {
            goal: Some(FitnessGoal::LoseWeight),
            fitness_level: Some(FitnessLevel::Beginner),
            dietary_preferences: [DietaryPreference::Vegan, DietaryPreference::GlutenFree]
                .into_iter()
                .collect(),
            ..UserPreferences::default()
        };
        let request = recommendations(&preferences);

        assert!(request.user.contains("Fitness Goal: lose_weight"));
        assert!(request.user.contains("Fitness Level: beginner"));
        assert!(request.user.contains("Available Equipment: Not specified"));
        assert!(request.user.contains("Dietary Preferences: vegan, gluten_free"));
        assert!(request.user.contains("\"dailyMeals\""));
        assert_eq!(request.max_tokens, 1000);
    }

    #[test]
    fn test_chat_prompt_defaults() {
        let request = chat("How often should I train?", &UserPreferences::default());
        assert!(request.system.contains("Fitness Goal: Not specified"));
        assert!(request.system.contains("Dietary Preferences: Not specified"));
        assert_eq!(request.user, "How often should I train?");
        assert_eq!(request.temperature, 0.8);
    }

    #[test]
    fn test_reminder_prompt_respects_toggles() {
        let settings = ReminderSettings {
            include_health_tips: false,
            ..ReminderSettings::default()
        };
        let request = reminders(&UserPreferences::default(), &settings, &Progress::default());
        assert!(request.system.contains("Do not include health tips."));
        assert!(request.system.contains("Include a brief mention of their progress stats."));
        assert!(request.system.contains("general fitness improvement"));
    }
}
