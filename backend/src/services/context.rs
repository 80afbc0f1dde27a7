//! Application context
//!
//! Holds the user's long-lived data (preferences, generated plans,
//! progress and saved weekly plans) and is the only writer of the store
//! keys for them. Every field has one update entry point; each mutation
//! is persisted before the context lock is released, so the store sees
//! writes in the order they were made.
//!
//! A generation counter is bumped whenever preferences change or
//! progress is reset. Gateway work records the generation when it starts
//! and its result is applied only if nothing has moved on since.

use crate::store::{keys, PreferenceStore};
use fitcoach_shared::planner::{MealWeek, WorkoutWeek};
use fitcoach_shared::{NutritionPlan, Progress, Recommendations, UserPreferences, WorkoutPlan};
use serde::Serialize;
use std::convert::Infallible;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Snapshot of everything the context owns
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub preferences: UserPreferences,
    pub nutrition_plan: Option<NutritionPlan>,
    pub workout_plan: Option<WorkoutPlan>,
    pub progress: Progress,
    pub weekly_workout: WorkoutWeek,
    pub weekly_meals: MealWeek,
}

#[derive(Debug, Default)]
struct ContextState {
    data: UserData,
    generation: u64,
}

pub struct AppContext {
    store: PreferenceStore,
    state: RwLock<ContextState>,
}

impl AppContext {
    /// Load persisted data; anything missing or unreadable starts from defaults
    pub async fn load(store: PreferenceStore) -> Self {
        let data = UserData {
            preferences: store
                .load_or(keys::USER_PREFERENCES, UserPreferences::default())
                .await,
            nutrition_plan: store.load_or(keys::NUTRITION_PLAN, None).await,
            workout_plan: store.load_or(keys::WORKOUT_PLAN, None).await,
            progress: store.load_or(keys::PROGRESS, Progress::default()).await,
            weekly_workout: store
                .load_or(keys::WEEKLY_WORKOUT_PLAN, WorkoutWeek::default())
                .await,
            weekly_meals: store
                .load_or(keys::WEEKLY_MEAL_PLAN, MealWeek::default())
                .await,
        };

        debug!(
            onboarded = data.preferences.is_complete(),
            has_plans = data.workout_plan.is_some(),
            "Loaded user data"
        );

        Self {
            store,
            state: RwLock::new(ContextState {
                data,
                generation: 0,
            }),
        }
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub async fn snapshot(&self) -> UserData {
        self.state.read().await.data.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    pub async fn preferences(&self) -> UserPreferences {
        self.state.read().await.data.preferences.clone()
    }

    pub async fn progress(&self) -> Progress {
        self.state.read().await.data.progress.clone()
    }

    pub async fn plans(&self) -> (Option<NutritionPlan>, Option<WorkoutPlan>) {
        let state = self.state.read().await;
        (
            state.data.nutrition_plan.clone(),
            state.data.workout_plan.clone(),
        )
    }

    pub async fn weekly_workout(&self) -> WorkoutWeek {
        self.state.read().await.data.weekly_workout.clone()
    }

    pub async fn weekly_meals(&self) -> MealWeek {
        self.state.read().await.data.weekly_meals.clone()
    }

    /// Modify preferences; bumps the generation
    pub async fn update_preferences<F>(&self, update: F) -> UserPreferences
    where
        F: FnOnce(&mut UserPreferences),
    {
        let result = self
            .try_update_preferences(|preferences| {
                update(preferences);
                Ok::<_, Infallible>(())
            })
            .await;
        match result {
            Ok(preferences) => preferences,
            Err(never) => match never {},
        }
    }

    /// Modify preferences if `update` succeeds
    ///
    /// On error nothing changes: the generation stays put and nothing is
    /// written to the store.
    pub async fn try_update_preferences<F, E>(&self, update: F) -> Result<UserPreferences, E>
    where
        F: FnOnce(&mut UserPreferences) -> Result<(), E>,
    {
        let mut state = self.state.write().await;
        let mut preferences = state.data.preferences.clone();
        update(&mut preferences)?;

        self.store.save(keys::USER_PREFERENCES, &preferences).await;
        state.data.preferences = preferences.clone();
        state.generation += 1;
        Ok(preferences)
    }

    pub async fn set_workout_plan(&self, plan: WorkoutPlan) {
        let mut state = self.state.write().await;
        self.store.save(keys::WORKOUT_PLAN, &plan).await;
        state.data.workout_plan = Some(plan);
    }

    pub async fn set_nutrition_plan(&self, plan: NutritionPlan) {
        let mut state = self.state.write().await;
        self.store.save(keys::NUTRITION_PLAN, &plan).await;
        state.data.nutrition_plan = Some(plan);
    }

    /// Modify progress counters
    pub async fn update_progress<F>(&self, update: F) -> Progress
    where
        F: FnOnce(&mut Progress),
    {
        let mut state = self.state.write().await;
        update(&mut state.data.progress);
        self.store.save(keys::PROGRESS, &state.data.progress).await;
        state.data.progress.clone()
    }

    /// Zero the counters; bumps the generation
    pub async fn reset_progress(&self) -> Progress {
        let mut state = self.state.write().await;
        state.data.progress.reset();
        state.generation += 1;
        self.store.save(keys::PROGRESS, &state.data.progress).await;
        state.data.progress.clone()
    }

    pub async fn set_weekly_workout(&self, week: WorkoutWeek) {
        let mut state = self.state.write().await;
        self.store.save(keys::WEEKLY_WORKOUT_PLAN, &week).await;
        state.data.weekly_workout = week;
    }

    pub async fn set_weekly_meals(&self, week: MealWeek) {
        let mut state = self.state.write().await;
        self.store.save(keys::WEEKLY_MEAL_PLAN, &week).await;
        state.data.weekly_meals = week;
    }

    /// Store generated plans if `generation` is still current
    ///
    /// Returns false, leaving the context untouched, when preferences or
    /// progress changed after the request started.
    pub async fn apply_recommendations(
        &self,
        generation: u64,
        recommendations: Recommendations,
    ) -> bool {
        let mut state = self.state.write().await;
        if state.generation != generation {
            info!(
                started = generation,
                current = state.generation,
                "Discarding stale recommendations"
            );
            return false;
        }

        self.store
            .save(keys::NUTRITION_PLAN, &recommendations.nutrition)
            .await;
        self.store
            .save(keys::WORKOUT_PLAN, &recommendations.workout)
            .await;
        state.data.nutrition_plan = Some(recommendations.nutrition);
        state.data.workout_plan = Some(recommendations.workout);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use async_trait::async_trait;
    use chrono::Utc;
    use fitcoach_shared::models::FitnessGoal;
    use fitcoach_shared::samples::sample_recommendations;
    use fitcoach_shared::StoreError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Holds the first progress write until released
    #[derive(Default)]
    struct StallingStore {
        inner: MemoryStore,
        stalled: AtomicBool,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl KeyValueStore for StallingStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            if key == keys::PROGRESS && !self.stalled.swap(true, Ordering::SeqCst) {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &str) -> Result<(), StoreError> {
            self.inner.delete(key).await
        }

        fn backend_name(&self) -> &'static str {
            "stalling"
        }
    }

    async fn context_with(store: &PreferenceStore) -> AppContext {
        AppContext::load(store.clone()).await
    }

    fn memory_store() -> PreferenceStore {
        PreferenceStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_updates_persist_and_reload() {
        let store = memory_store();
        let context = context_with(&store).await;

        context
            .update_preferences(|p| p.goal = Some(FitnessGoal::BuildMuscle))
            .await;
        context.update_progress(|p| p.record_workout(Utc::now())).await;

        let reloaded = context_with(&store).await;
        assert_eq!(
            reloaded.preferences().await.goal,
            Some(FitnessGoal::BuildMuscle)
        );
        assert_eq!(reloaded.progress().await.workouts_completed, 1);
    }

    #[tokio::test]
    async fn test_stale_recommendations_discarded() {
        let context = context_with(&memory_store()).await;
        let started = context.generation().await;

        context
            .update_preferences(|p| p.goal = Some(FitnessGoal::LoseWeight))
            .await;

        assert!(!context.apply_recommendations(started, sample_recommendations()).await);
        assert_eq!(context.plans().await, (None, None));
    }

    #[tokio::test]
    async fn test_current_recommendations_applied() {
        let store = memory_store();
        let context = context_with(&store).await;
        let started = context.generation().await;

        assert!(context.apply_recommendations(started, sample_recommendations()).await);

        let reloaded = context_with(&store).await;
        let (nutrition, workout) = reloaded.plans().await;
        assert_eq!(nutrition, Some(sample_recommendations().nutrition));
        assert_eq!(workout, Some(sample_recommendations().workout));
    }

    #[tokio::test]
    async fn test_failed_preference_update_changes_nothing() {
        let store = memory_store();
        let context = context_with(&store).await;
        let before = context.generation().await;

        let result = context
            .try_update_preferences(|p| {
                p.goal = Some(FitnessGoal::LoseWeight);
                Err("rejected")
            })
            .await;

        assert_eq!(result, Err("rejected"));
        assert_eq!(context.generation().await, before);
        assert_eq!(context.preferences().await.goal, None);
        assert_eq!(context_with(&store).await.preferences().await.goal, None);
    }

    #[tokio::test]
    async fn test_reset_bumps_generation() {
        let context = context_with(&memory_store()).await;
        context.update_progress(|p| p.record_meal(Utc::now())).await;
        let before = context.generation().await;

        let progress = context.reset_progress().await;
        assert_eq!(progress, Progress::default());
        assert_eq!(context.generation().await, before + 1);
    }

    #[tokio::test]
    async fn test_overlapping_updates_persist_in_order() {
        let raw = Arc::new(StallingStore::default());
        let store = PreferenceStore::new(raw.clone());
        let context = Arc::new(context_with(&store).await);

        let first = tokio::spawn({
            let context = context.clone();
            async move { context.update_progress(|p| p.record_workout(Utc::now())).await }
        });
        raw.entered.notified().await;

        let second = tokio::spawn({
            let context = context.clone();
            async move { context.update_progress(|p| p.record_workout(Utc::now())).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        raw.release.notify_one();

        assert_eq!(first.await.unwrap().workouts_completed, 1);
        assert_eq!(second.await.unwrap().workouts_completed, 2);
        assert_eq!(context.progress().await.workouts_completed, 2);

        let reloaded = context_with(&store).await;
        assert_eq!(reloaded.progress().await.workouts_completed, 2);
    }
}
