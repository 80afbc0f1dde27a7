//! Weekly workout and meal planning

pub mod nutrition;
pub mod selection;
pub mod week;
pub mod weekday;
pub mod workout;

pub use nutrition::{DayMeals, MealPlanner, MealWeek};
pub use selection::{SelectedExercise, Selection};
pub use week::WeeklyPlan;
pub use weekday::Day;
pub use workout::{CommitOutcome, WorkoutPlanner, WorkoutWeek};
