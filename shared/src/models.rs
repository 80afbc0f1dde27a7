//! User profile models for the FitCoach application

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Primary fitness goal chosen during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    BuildMuscle,
    ImproveFitness,
    ImproveHealth,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::LoseWeight,
        FitnessGoal::BuildMuscle,
        FitnessGoal::ImproveFitness,
        FitnessGoal::ImproveHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::BuildMuscle => "build_muscle",
            FitnessGoal::ImproveFitness => "improve_fitness",
            FitnessGoal::ImproveHealth => "improve_health",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose Weight",
            FitnessGoal::BuildMuscle => "Build Muscle",
            FitnessGoal::ImproveFitness => "Improve Overall Fitness",
            FitnessGoal::ImproveHealth => "Improve Health",
        }
    }

    /// Goal as prose, e.g. "lose weight"
    pub fn phrase(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported fitness level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment the user has access to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentAccess {
    None,
    Minimal,
    HomeGym,
    FullGym,
}

impl EquipmentAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentAccess::None => "none",
            EquipmentAccess::Minimal => "minimal",
            EquipmentAccess::HomeGym => "home_gym",
            EquipmentAccess::FullGym => "full_gym",
        }
    }
}

impl fmt::Display for EquipmentAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary preference tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    None,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::GlutenFree => "gluten_free",
            DietaryPreference::DairyFree => "dairy_free",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Paleo => "paleo",
            DietaryPreference::None => "none",
        }
    }
}

/// Time budgets in minutes, kept as the strings the user picked ("15", "30", ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeAvailability {
    #[serde(default)]
    pub workout: Option<String>,
    #[serde(default)]
    pub meal_prep: Option<String>,
}

impl TimeAvailability {
    pub fn is_complete(&self) -> bool {
        self.workout.as_deref().is_some_and(|m| !m.is_empty())
            && self.meal_prep.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// User preferences collected by onboarding
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    #[serde(default)]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default)]
    pub equipment: Option<EquipmentAccess>,
    #[serde(default)]
    pub dietary_preferences: BTreeSet<DietaryPreference>,
    #[serde(default)]
    pub time_availability: TimeAvailability,
}

impl UserPreferences {
    /// Whether onboarding has produced a usable profile
    pub fn is_complete(&self) -> bool {
        self.goal.is_some()
            && self.fitness_level.is_some()
            && self.equipment.is_some()
            && self.time_availability.is_complete()
    }

    /// Shallow merge: every field present in the update replaces the current value
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(goal) = update.goal {
            self.goal = Some(goal);
        }
        if let Some(level) = update.fitness_level {
            self.fitness_level = Some(level);
        }
        if let Some(equipment) = update.equipment {
            self.equipment = Some(equipment);
        }
        if let Some(dietary) = update.dietary_preferences {
            self.dietary_preferences = dietary;
        }
        if let Some(time) = update.time_availability {
            self.time_availability = time;
        }
    }

    /// Comma-separated dietary tags, as embedded in prompts
    pub fn dietary_list(&self) -> String {
        self.dietary_preferences
            .iter()
            .map(DietaryPreference::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Partial preferences used for shallow merges
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<EquipmentAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<BTreeSet<DietaryPreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_availability: Option<TimeAvailability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_preferences() -> UserPreferences {
        UserPreferences {
            goal: Some(FitnessGoal::BuildMuscle),
            fitness_level: Some(FitnessLevel::Intermediate),
            equipment: Some(EquipmentAccess::FullGym),
            dietary_preferences: [DietaryPreference::Vegan].into_iter().collect(),
            time_availability: TimeAvailability {
                workout: Some("45".to_string()),
                meal_prep: Some("30".to_string()),
            },
        }
    }

    #[test]
    fn test_default_preferences_incomplete() {
        assert!(!UserPreferences::default().is_complete());
        assert!(complete_preferences().is_complete());
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut prefs = complete_preferences();
        prefs.merge(PreferencesUpdate {
            goal: Some(FitnessGoal::LoseWeight),
            ..Default::default()
        });

        assert_eq!(prefs.goal, Some(FitnessGoal::LoseWeight));
        assert_eq!(prefs.fitness_level, Some(FitnessLevel::Intermediate));
        assert!(prefs.dietary_preferences.contains(&DietaryPreference::Vegan));
    }

    #[test]
    fn test_merge_replaces_time_availability_wholesale() {
        let mut prefs = complete_preferences();
        prefs.merge(PreferencesUpdate {
            time_availability: Some(TimeAvailability {
                workout: Some("15".to_string()),
                meal_prep: None,
            }),
            ..Default::default()
        });

        assert_eq!(prefs.time_availability.workout.as_deref(), Some("15"));
        assert_eq!(prefs.time_availability.meal_prep, None);
    }

    #[test]
    fn test_preferences_json_shape() {
        let json = serde_json::to_value(complete_preferences()).unwrap();
        assert_eq!(json["goal"], "build_muscle");
        assert_eq!(json["fitnessLevel"], "intermediate");
        assert_eq!(json["equipment"], "full_gym");
        assert_eq!(json["dietaryPreferences"][0], "vegan");
        assert_eq!(json["timeAvailability"]["mealPrep"], "30");
    }

    #[test]
    fn test_goal_phrase() {
        assert_eq!(FitnessGoal::LoseWeight.phrase(), "lose weight");
    }
}
