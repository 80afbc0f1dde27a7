//! Key-value persistence for user data
//!
//! Backends implement the raw string contract in [`KeyValueStore`].
//! [`PreferenceStore`] layers typed, fail-soft JSON access on top: reads
//! that fail fall back to a default and writes that fail are logged.

use async_trait::async_trait;
use fitcoach_shared::StoreError;

mod memory;
mod redis;
mod typed;

pub use self::redis::RedisStore;
pub use memory::MemoryStore;
pub use typed::PreferenceStore;

/// Store keys; each is written by exactly one feature
pub mod keys {
    pub const USER_PREFERENCES: &str = "userPreferences";
    pub const NUTRITION_PLAN: &str = "nutritionPlan";
    pub const WORKOUT_PLAN: &str = "workoutPlan";
    pub const PROGRESS: &str = "progress";
    pub const WEEKLY_WORKOUT_PLAN: &str = "weeklyWorkoutPlan";
    pub const WEEKLY_MEAL_PLAN: &str = "weeklyMealPlan";
    pub const REMINDER_SETTINGS: &str = "reminderSettings";
}

/// Raw async string store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Backend reachability, used by the readiness probe
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str;
}
