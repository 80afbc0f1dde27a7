//! Progress counters for completed workouts and followed meals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workouts the dashboard treats as a full cycle
pub const WORKOUTS_TARGET: u32 = 12;

/// Meals the dashboard treats as a full cycle
pub const MEALS_TARGET: u32 = 30;

/// User progress
///
/// Counters only grow, except through an explicit [`Progress::reset`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub workouts_completed: u32,
    pub meals_followed: u32,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Progress {
    pub fn record_workout(&mut self, now: DateTime<Utc>) {
        self.workouts_completed = self.workouts_completed.saturating_add(1);
        self.last_updated = Some(now);
    }

    pub fn record_meal(&mut self, now: DateTime<Utc>) {
        self.meals_followed = self.meals_followed.saturating_add(1);
        self.last_updated = Some(now);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Completion against the dashboard targets, rounded to a whole percent
    ///
    /// Not capped: a user past both targets reports more than 100.
    pub fn completion_percentage(&self) -> u32 {
        let done = f64::from(self.workouts_completed) + f64::from(self.meals_followed);
        let target = f64::from(WORKOUTS_TARGET + MEALS_TARGET);
        (done / target * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_updates_timestamp() {
        let now = Utc::now();
        let mut progress = Progress::default();
        progress.record_workout(now);
        progress.record_meal(now);

        assert_eq!(progress.workouts_completed, 1);
        assert_eq!(progress.meals_followed, 1);
        assert_eq!(progress.last_updated, Some(now));
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut progress = Progress {
            workouts_completed: 5,
            meals_followed: 9,
            last_updated: Some(Utc::now()),
        };
        progress.reset();
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn test_completion_percentage() {
        let progress = Progress {
            workouts_completed: 3,
            meals_followed: 7,
            last_updated: None,
        };
        // 10 / 42 = 23.8%
        assert_eq!(progress.completion_percentage(), 24);
        assert_eq!(Progress::default().completion_percentage(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_counters_never_decrease(ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut progress = Progress::default();
            let now = Utc::now();
            for workout in ops {
                let before = (progress.workouts_completed, progress.meals_followed);
                if workout {
                    progress.record_workout(now);
                } else {
                    progress.record_meal(now);
                }
                prop_assert!(progress.workouts_completed >= before.0);
                prop_assert!(progress.meals_followed >= before.1);
            }
        }
    }
}
