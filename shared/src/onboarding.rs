//! Onboarding wizard
//!
//! A linear sequence of steps. `next` only advances once the current step
//! has its answer; `complete` is allowed on the review step and consumes
//! the wizard.

use crate::models::{
    DietaryPreference, EquipmentAccess, FitnessGoal, FitnessLevel, PreferencesUpdate,
    TimeAvailability, UserPreferences,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Goal,
    FitnessLevel,
    Equipment,
    TimeAvailability,
    DietaryPreferences,
    Review,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 7] = [
        OnboardingStep::Welcome,
        OnboardingStep::Goal,
        OnboardingStep::FitnessLevel,
        OnboardingStep::Equipment,
        OnboardingStep::TimeAvailability,
        OnboardingStep::DietaryPreferences,
        OnboardingStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_last(self) -> bool {
        self == OnboardingStep::Review
    }

    fn following(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn preceding(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("{message}")]
    MissingAnswer {
        step: OnboardingStep,
        message: &'static str,
    },

    #[error("Already on the last step")]
    AtLastStep,

    #[error("Onboarding can only be completed from the review step")]
    NotAtReview,
}

/// Answers collected so far
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    pub goal: Option<FitnessGoal>,
    pub fitness_level: Option<FitnessLevel>,
    pub equipment: Option<EquipmentAccess>,
    pub dietary_preferences: BTreeSet<DietaryPreference>,
    pub time_availability: TimeAvailability,
}

/// Partial form edit; absent fields are left alone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEdit {
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    #[serde(default)]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default)]
    pub equipment: Option<EquipmentAccess>,
    #[serde(default)]
    pub workout_minutes: Option<String>,
    #[serde(default)]
    pub meal_prep_minutes: Option<String>,
    /// Tags to flip in or out of the dietary set
    #[serde(default)]
    pub toggle_dietary: Vec<DietaryPreference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingWizard {
    step: OnboardingStep,
    form: OnboardingForm,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn edit(&mut self, edit: FormEdit) {
        if let Some(goal) = edit.goal {
            self.form.goal = Some(goal);
        }
        if let Some(level) = edit.fitness_level {
            self.form.fitness_level = Some(level);
        }
        if let Some(equipment) = edit.equipment {
            self.form.equipment = Some(equipment);
        }
        if let Some(minutes) = edit.workout_minutes {
            self.form.time_availability.workout = Some(minutes);
        }
        if let Some(minutes) = edit.meal_prep_minutes {
            self.form.time_availability.meal_prep = Some(minutes);
        }
        for tag in edit.toggle_dietary {
            self.toggle_dietary(tag);
        }
    }

    pub fn toggle_dietary(&mut self, tag: DietaryPreference) {
        if !self.form.dietary_preferences.remove(&tag) {
            self.form.dietary_preferences.insert(tag);
        }
    }

    fn check_current(&self) -> Result<(), OnboardingError> {
        let step = self.step();
        let message = match step {
            OnboardingStep::Goal if self.form.goal.is_none() => "Please choose a fitness goal",
            OnboardingStep::FitnessLevel if self.form.fitness_level.is_none() => {
                "Please choose your fitness level"
            }
            OnboardingStep::Equipment if self.form.equipment.is_none() => {
                "Please choose your available equipment"
            }
            OnboardingStep::TimeAvailability if !self.form.time_availability.is_complete() => {
                "Please choose both workout and meal prep time"
            }
            _ => return Ok(()),
        };
        Err(OnboardingError::MissingAnswer { step, message })
    }

    pub fn next(&mut self) -> Result<OnboardingStep, OnboardingError> {
        self.check_current()?;
        let next = self.step().following().ok_or(OnboardingError::AtLastStep)?;
        self.step = next;
        Ok(next)
    }

    /// Step back; stays put on the first step
    pub fn back(&mut self) -> OnboardingStep {
        if let Some(previous) = self.step().preceding() {
            self.step = previous;
        }
        self.step()
    }

    pub fn ensure_completable(&self) -> Result<(), OnboardingError> {
        if self.step().is_last() {
            Ok(())
        } else {
            Err(OnboardingError::NotAtReview)
        }
    }

    /// Merge the answers over `current`, consuming the wizard
    pub fn complete(self, current: &UserPreferences) -> Result<UserPreferences, OnboardingError> {
        self.ensure_completable()?;
        let mut merged = current.clone();
        merged.merge(PreferencesUpdate {
            goal: self.form.goal,
            fitness_level: self.form.fitness_level,
            equipment: self.form.equipment,
            dietary_preferences: Some(self.form.dietary_preferences),
            time_availability: Some(self.form.time_availability),
        });
        Ok(merged)
    }
}
