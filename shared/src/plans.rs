//! Generated plan data model
//!
//! These are the shapes the AI gateway is asked to produce. Each derives
//! `Validate`, so a reply that deserializes but violates the schema (no
//! meals, zero sets, blank names) is rejected rather than shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Repetitions for one set: a count, or a free-text duration for timed work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Timed(String),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{}", n),
            Reps::Timed(text) => f.write_str(text),
        }
    }
}

fn validate_reps(reps: &Reps) -> Result<(), validator::ValidationError> {
    match reps {
        Reps::Count(0) => Err(validator::ValidationError::new("reps_positive")),
        Reps::Timed(text) if text.trim().is_empty() => {
            Err(validator::ValidationError::new("reps_duration_empty"))
        }
        _ => Ok(()),
    }
}

/// Macronutrients for one meal; macros keep their unit suffix ("25g")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct NutritionFacts {
    #[validate(range(max = 10000))]
    pub calories: u32,
    #[validate(length(min = 1))]
    pub protein: String,
    #[validate(length(min = 1))]
    pub carbs: String,
    #[validate(length(min = 1))]
    pub fats: String,
}

/// A meal within a generated nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub prep_time: String,
    #[validate(nested)]
    pub nutrition_facts: NutritionFacts,
}

/// Daily nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    #[validate(length(min = 1), nested)]
    pub daily_meals: Vec<PlannedMeal>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl NutritionPlan {
    pub fn total_calories(&self) -> u32 {
        self.daily_meals
            .iter()
            .fold(0u32, |total, m| total.saturating_add(m.nutrition_facts.calories))
    }
}

/// An exercise within a generated workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub sets: u32,
    #[validate(custom(function = "validate_reps"))]
    pub reps: Reps,
    /// Rest between sets, in seconds
    #[serde(default)]
    pub rest_time: String,
    #[serde(default)]
    pub description: String,
}

/// Workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[validate(length(min = 1))]
    pub name: String,
    /// Session length in minutes
    #[serde(default)]
    pub duration: String,
    #[validate(length(min = 1), nested)]
    pub exercises: Vec<PlannedExercise>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Reply shape for plan generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct Recommendations {
    #[validate(nested)]
    pub nutrition: NutritionPlan,
    #[validate(nested)]
    pub workout: WorkoutPlan,
}

/// Reply shape for progress feedback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[validate(length(min = 1))]
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub next_steps: String,
}
