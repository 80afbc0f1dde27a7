//! Weekly meal plan and the meal planner session

use super::week::WeeklyPlan;
use super::weekday::Day;
use crate::catalog::{catalog, Meal, MealSlot};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// The four meal slots of one day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMeals {
    pub breakfast: Option<Meal>,
    pub lunch: Option<Meal>,
    pub dinner: Option<Meal>,
    pub snacks: Option<Meal>,
}

impl DayMeals {
    pub fn slot(&self, slot: MealSlot) -> Option<&Meal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snacks => self.snacks.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Meal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    pub fn is_empty(&self) -> bool {
        MealSlot::ALL.iter().all(|s| self.slot(*s).is_none())
    }

    pub fn calories(&self) -> u32 {
        MealSlot::ALL
            .iter()
            .filter_map(|s| self.slot(*s))
            .map(|m| m.nutrition_facts.calories)
            .sum()
    }
}

/// Meals planned per weekday
pub type MealWeek = WeeklyPlan<DayMeals>;

impl WeeklyPlan<DayMeals> {
    /// Put `meal` in a slot, replacing whatever was there
    pub fn assign(&mut self, day: Day, slot: MealSlot, meal: Meal) {
        *self[day].slot_mut(slot) = Some(meal);
    }

    pub fn clear_slot(&mut self, day: Day, slot: MealSlot) {
        *self[day].slot_mut(slot) = None;
    }

    pub fn has_any_meals(&self) -> bool {
        self.values().any(|d| !d.is_empty())
    }

    pub fn day_calories(&self, day: Day) -> u32 {
        self[day].calories()
    }
}

/// One user's in-progress weekly meal planning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlanner {
    week: MealWeek,
}

impl MealPlanner {
    pub fn with_week(week: MealWeek) -> Self {
        Self { week }
    }

    pub fn week(&self) -> &MealWeek {
        &self.week
    }

    /// Assign a catalog meal by id; the meal must belong to `slot`
    pub fn assign(
        &mut self,
        day: Day,
        slot: MealSlot,
        meal_id: &str,
    ) -> Result<&Meal, ValidationError> {
        let meal = catalog().meal(meal_id).ok_or_else(|| {
            ValidationError::for_field("mealId", format!("Unknown meal: {}", meal_id))
        })?;
        if meal.slot != slot {
            return Err(ValidationError::for_field(
                "mealId",
                format!("{} is not a {} option", meal.name, slot),
            ));
        }
        self.week.assign(day, slot, meal.clone());
        Ok(meal)
    }

    pub fn clear_slot(&mut self, day: Day, slot: MealSlot) {
        self.week.clear_slot(day, slot);
    }

    pub fn validate_for_save(&self) -> Result<&MealWeek, ValidationError> {
        if !self.week.has_any_meals() {
            return Err(ValidationError::new(
                "Please add at least one meal to your plan before saving.",
            ));
        }
        Ok(&self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fresh_week_all_slots_empty() {
        let week = MealWeek::default();
        for (_, meals) in week.iter() {
            for slot in MealSlot::ALL {
                assert!(meals.slot(slot).is_none());
            }
        }
        assert!(!week.has_any_meals());
    }

    #[test]
    fn test_assign_replaces_occupied_slot() {
        let mut planner = MealPlanner::default();
        planner.assign(Day::Monday, MealSlot::Breakfast, "b1").unwrap();
        planner.assign(Day::Monday, MealSlot::Breakfast, "b2").unwrap();

        let breakfast = planner.week()[Day::Monday].slot(MealSlot::Breakfast).unwrap();
        assert_eq!(breakfast.id, "b2");
    }

    #[test]
    fn test_clear_slot() {
        let mut planner = MealPlanner::default();
        planner.assign(Day::Friday, MealSlot::Dinner, "d1").unwrap();
        planner.clear_slot(Day::Friday, MealSlot::Dinner);
        assert!(!planner.week().has_any_meals());
    }

    #[test]
    fn test_day_calories_sums_assigned_slots() {
        let mut planner = MealPlanner::default();
        let b = planner
            .assign(Day::Sunday, MealSlot::Breakfast, "b1")
            .unwrap()
            .nutrition_facts
            .calories;
        let s = planner
            .assign(Day::Sunday, MealSlot::Snacks, "s1")
            .unwrap()
            .nutrition_facts
            .calories;
        assert_eq!(planner.week().day_calories(Day::Sunday), b + s);
        assert_eq!(planner.week().day_calories(Day::Monday), 0);
    }

    #[rstest]
    #[case("zz1", MealSlot::Lunch)]
    #[case("d1", MealSlot::Lunch)]
    fn test_assign_rejects_bad_meal(#[case] meal_id: &str, #[case] slot: MealSlot) {
        let mut planner = MealPlanner::default();
        let err = planner.assign(Day::Monday, slot, meal_id).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("mealId"));
        assert!(!planner.week().has_any_meals());
    }

    #[test]
    fn test_save_rejects_empty_week() {
        let planner = MealPlanner::default();
        assert_eq!(
            planner.validate_for_save().unwrap_err().message,
            "Please add at least one meal to your plan before saving."
        );
    }
}
