//! FitCoach Shared Library
//!
//! Domain types and logic shared by the backend and its clients: the
//! exercise and meal catalogs, weekly planners, onboarding, generated
//! plan schemas and their fallbacks, progress, reminders and body
//! transformation projections.

pub mod catalog;
pub mod errors;
pub mod library;
pub mod models;
pub mod onboarding;
pub mod planner;
pub mod plans;
pub mod progress;
pub mod reminders;
pub mod reply;
pub mod samples;
pub mod transformation;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{
    DietaryPreference, EquipmentAccess, FitnessGoal, FitnessLevel, PreferencesUpdate,
    TimeAvailability, UserPreferences,
};
pub use plans::{Feedback, NutritionPlan, Recommendations, WorkoutPlan};
pub use progress::Progress;
