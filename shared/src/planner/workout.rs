//! Weekly workout plan and the workout planner session

use super::selection::{SelectedExercise, Selection};
use super::week::WeeklyPlan;
use super::weekday::Day;
use crate::catalog::{catalog, BodyPart};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercises planned per weekday
pub type WorkoutWeek = WeeklyPlan<Vec<SelectedExercise>>;

impl WeeklyPlan<Vec<SelectedExercise>> {
    /// Append `pending` to `day` as-is; returns how many were added
    pub fn commit_pending(&mut self, day: Day, pending: Vec<SelectedExercise>) -> usize {
        let count = pending.len();
        self[day].extend(pending);
        count
    }

    /// Drop one instance from `day`; unknown ids leave the plan untouched
    pub fn remove(&mut self, day: Day, instance_id: Uuid) {
        self[day].retain(|s| s.instance_id != instance_id);
    }

    /// "Rest day", or body parts with counts in first-seen order
    pub fn summarize(&self, day: Day) -> String {
        let exercises = &self[day];
        if exercises.is_empty() {
            return "Rest day".to_string();
        }

        let mut counts: Vec<(BodyPart, usize)> = Vec::new();
        for selected in exercises {
            match counts.iter_mut().find(|(part, _)| *part == selected.body_part) {
                Some((_, n)) => *n += 1,
                None => counts.push((selected.body_part, 1)),
            }
        }

        counts
            .iter()
            .map(|(part, n)| format!("{} ({})", part.display_name(), n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_any_exercises(&self) -> bool {
        self.values().any(|day| !day.is_empty())
    }

    pub fn exercise_count(&self) -> usize {
        self.values().map(Vec::len).sum()
    }
}

/// Result of committing the pending selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    NothingSelected,
    Committed { day: Day, count: usize },
}

impl CommitOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            CommitOutcome::NothingSelected => "No Exercises Selected",
            CommitOutcome::Committed { .. } => "Exercises Added",
        }
    }

    pub fn message(&self) -> String {
        match self {
            CommitOutcome::NothingSelected => {
                "Please select at least one exercise to add to your workout.".to_string()
            }
            CommitOutcome::Committed { day, count } => {
                format!("Added {} exercise(s) to your {} workout.", count, day)
            }
        }
    }
}

/// One user's in-progress weekly workout planning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanner {
    day: Day,
    selection: Selection,
    week: WorkoutWeek,
}

impl WorkoutPlanner {
    /// Start from a previously saved week
    pub fn with_week(week: WorkoutWeek) -> Self {
        Self {
            week,
            ..Self::default()
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn select_day(&mut self, day: Day) {
        self.day = day;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_category(&mut self, category: BodyPart) {
        self.selection.set_category(category);
    }

    pub fn week(&self) -> &WorkoutWeek {
        &self.week
    }

    /// Toggle a catalog exercise by id; returns whether it is now pending
    pub fn toggle(&mut self, exercise_id: &str) -> Result<bool, ValidationError> {
        let exercise = catalog().exercise(exercise_id).ok_or_else(|| {
            ValidationError::for_field("exerciseId", format!("Unknown exercise: {}", exercise_id))
        })?;
        Ok(self.selection.toggle(exercise))
    }

    /// Move everything pending onto the selected day
    pub fn commit(&mut self) -> CommitOutcome {
        if self.selection.pending_count() == 0 {
            return CommitOutcome::NothingSelected;
        }
        let pending = self.selection.pending().to_vec();
        let count = self.week.commit_pending(self.day, pending);
        self.selection.clear();
        CommitOutcome::Committed {
            day: self.day,
            count,
        }
    }

    pub fn remove(&mut self, day: Day, instance_id: Uuid) {
        self.week.remove(day, instance_id);
    }

    pub fn summary(&self) -> WeeklyPlan<String> {
        let mut summary = WeeklyPlan::default();
        for day in Day::ALL {
            summary[day] = self.week.summarize(day);
        }
        summary
    }

    /// The week to persist, or why it cannot be saved
    pub fn validate_for_save(&self) -> Result<&WorkoutWeek, ValidationError> {
        if !self.week.has_any_exercises() {
            return Err(ValidationError::new(
                "Please add at least one exercise to your workout plan before saving.",
            ));
        }
        Ok(&self.week)
    }
}
