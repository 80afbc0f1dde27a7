//! Static exercise and meal catalogs
//!
//! The catalogs are loaded once and never mutated. Planner sessions copy
//! entries out of them; nothing ever writes back.

use crate::plans::{NutritionFacts, Reps};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body part an exercise is grouped under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Abs,
    Cardio,
}

impl BodyPart {
    pub const ALL: [BodyPart; 8] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Shoulders,
        BodyPart::Biceps,
        BodyPart::Triceps,
        BodyPart::Legs,
        BodyPart::Abs,
        BodyPart::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Chest => "chest",
            BodyPart::Back => "back",
            BodyPart::Shoulders => "shoulders",
            BodyPart::Biceps => "biceps",
            BodyPart::Triceps => "triceps",
            BodyPart::Legs => "legs",
            BodyPart::Abs => "abs",
            BodyPart::Cardio => "cardio",
        }
    }

    /// Name shown in day summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Biceps => "Biceps",
            BodyPart::Triceps => "Triceps",
            BodyPart::Legs => "Legs",
            BodyPart::Abs => "Abs",
            BodyPart::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        BodyPart::ALL
            .into_iter()
            .find(|part| part.as_str() == normalized)
            .ok_or_else(|| format!("Unknown body part: {}", s))
    }
}

/// Exercise difficulty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: BodyPart,
    pub sets: u32,
    pub reps: Reps,
    pub difficulty: Difficulty,
    pub equipment: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<String>,
}

/// Meal-time slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == normalized)
            .ok_or_else(|| format!("Unknown meal slot: {}", s))
    }
}

/// Meal catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub slot: MealSlot,
    pub description: String,
    pub ingredients: Vec<String>,
    pub prep_time: String,
    pub nutrition_facts: NutritionFacts,
}

/// Read-only exercise and meal reference data
#[derive(Debug)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    meals: Vec<Meal>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// The built-in catalog
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

impl Catalog {
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Exercises for one body part, in catalog order
    pub fn exercises_for(&self, body_part: BodyPart) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.body_part == body_part)
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Meals for one slot, in catalog order
    pub fn meals_for(&self, slot: MealSlot) -> impl Iterator<Item = &Meal> {
        self.meals.iter().filter(move |m| m.slot == slot)
    }

    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    fn builtin() -> Self {
        Self {
            exercises: builtin_exercises(),
            meals: builtin_meals(),
        }
    }
}

fn exercise(
    id: &str,
    name: &str,
    body_part: BodyPart,
    sets: u32,
    reps: Reps,
    difficulty: Difficulty,
    equipment: &str,
    description: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        body_part,
        sets,
        reps,
        difficulty,
        equipment: equipment.to_string(),
        description: description.to_string(),
        variations: Vec::new(),
    }
}

#[rustfmt::skip]
fn builtin_exercises() -> Vec<Exercise> {
    use BodyPart::*;
    use Difficulty::*;

    let count = Reps::Count;
    let timed = |s: &str| Reps::Timed(s.to_string());

    vec![
        exercise("c1", "Bench Press", Chest, 3, count(10), Intermediate, "Barbell, bench", "Lower the bar to mid-chest and press back to lockout."),
        exercise("c2", "Push-ups", Chest, 3, count(15), Beginner, "None", "Keep a straight line from head to heels while lowering and pressing."),
        exercise("c3", "Dumbbell Flyes", Chest, 3, count(12), Intermediate, "Dumbbells, bench", "Open the arms in a wide arc, then squeeze the chest to bring them together."),
        exercise("c4", "Incline Press", Chest, 3, count(8), Advanced, "Barbell, incline bench", "Press from the upper chest on a 30-45 degree bench."),
        exercise("b1", "Pull-ups", Back, 3, count(8), Intermediate, "Pull-up bar", "Pull the chin over the bar from a dead hang."),
        exercise("b2", "Bent Over Rows", Back, 3, count(12), Intermediate, "Barbell", "Hinge at the hips and row the bar to the lower ribs."),
        exercise("b3", "Lat Pulldowns", Back, 3, count(12), Beginner, "Cable machine", "Pull the bar to the upper chest, leading with the elbows."),
        exercise("b4", "Deadlifts", Back, 3, count(8), Advanced, "Barbell", "Drive through the floor keeping the bar close and the back flat."),
        exercise("s1", "Overhead Press", Shoulders, 3, count(10), Intermediate, "Barbell", "Press the bar overhead from the front rack without arching."),
        exercise("s2", "Lateral Raises", Shoulders, 3, count(15), Beginner, "Dumbbells", "Raise the arms out to shoulder height with soft elbows."),
        exercise("s3", "Front Raises", Shoulders, 3, count(12), Beginner, "Dumbbells", "Raise the weights in front to eye level, then lower slowly."),
        exercise("s4", "Face Pulls", Shoulders, 3, count(15), Intermediate, "Cable machine, rope", "Pull the rope toward the face, separating the hands."),
        exercise("bi1", "Barbell Curls", Biceps, 3, count(12), Beginner, "Barbell", "Curl the bar with elbows pinned to the sides."),
        exercise("bi2", "Hammer Curls", Biceps, 3, count(12), Beginner, "Dumbbells", "Curl with a neutral grip, thumbs up."),
        exercise("bi3", "Preacher Curls", Biceps, 3, count(10), Intermediate, "EZ bar, preacher bench", "Curl over the pad without swinging."),
        exercise("bi4", "Concentration Curls", Biceps, 3, count(12), Beginner, "Dumbbell", "Seated, brace the elbow on the thigh and curl."),
        exercise("t1", "Tricep Dips", Triceps, 3, count(12), Intermediate, "Parallel bars", "Lower until the elbows reach 90 degrees, then press up."),
        exercise("t2", "Tricep Pushdowns", Triceps, 3, count(15), Beginner, "Cable machine", "Push the bar down to full extension, elbows fixed."),
        exercise("t3", "Skull Crushers", Triceps, 3, count(10), Intermediate, "EZ bar, bench", "Lower the bar toward the forehead and extend."),
        exercise("t4", "Overhead Tricep Extension", Triceps, 3, count(12), Beginner, "Dumbbell", "Lower the weight behind the head and extend overhead."),
        exercise("l1", "Squats", Legs, 3, count(10), Intermediate, "Barbell, rack", "Sit between the hips to depth and drive back up."),
        exercise("l2", "Lunges", Legs, 3, count(12), Beginner, "None", "Step forward and lower both knees to 90 degrees."),
        exercise("l3", "Leg Press", Legs, 3, count(12), Intermediate, "Leg press machine", "Lower the sled under control and press without locking the knees."),
        exercise("l4", "Calf Raises", Legs, 3, count(20), Beginner, "None", "Rise onto the toes and lower through a full range."),
        exercise("a1", "Crunches", Abs, 3, count(20), Beginner, "None", "Curl the shoulders off the floor, keeping the lower back down."),
        exercise("a2", "Leg Raises", Abs, 3, count(15), Intermediate, "None", "Raise straight legs to vertical and lower slowly."),
        exercise("a3", "Planks", Abs, 3, timed("30 seconds"), Beginner, "None", "Hold a straight forearm plank with the core braced."),
        exercise("a4", "Russian Twists", Abs, 3, count(20), Intermediate, "None", "Rotate the torso side to side with feet raised."),
        exercise("ca1", "Treadmill", Cardio, 1, timed("20 minutes"), Beginner, "Treadmill", "Steady-state walk or run at a conversational pace."),
        exercise("ca2", "Jump Rope", Cardio, 3, timed("5 minutes"), Intermediate, "Jump rope", "Stay on the balls of the feet with small, quick jumps."),
        exercise("ca3", "Cycling", Cardio, 1, timed("30 minutes"), Beginner, "Bike", "Moderate cadence with steady resistance."),
        exercise("ca4", "HIIT Circuit", Cardio, 5, timed("1 minute work, 30s rest"), Advanced, "None", "Alternate all-out effort with short recoveries."),
    ]
}

fn meal(
    id: &str,
    name: &str,
    slot: MealSlot,
    description: &str,
    ingredients: &[&str],
    prep_time: &str,
    nutrition: (u32, &str, &str, &str),
) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        slot,
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        prep_time: prep_time.to_string(),
        nutrition_facts: NutritionFacts {
            calories: nutrition.0,
            protein: nutrition.1.to_string(),
            carbs: nutrition.2.to_string(),
            fats: nutrition.3.to_string(),
        },
    }
}

#[rustfmt::skip]
fn builtin_meals() -> Vec<Meal> {
    use MealSlot::*;

    vec![
        meal("b1", "Protein Oatmeal", Breakfast, "Oatmeal with protein powder, berries, and nuts",
            &["Oats", "Protein powder", "Berries", "Nuts", "Almond milk"], "10 minutes", (380, "24g", "45g", "12g")),
        meal("b2", "Veggie Omelette", Breakfast, "Egg omelette with spinach, tomatoes, and feta cheese",
            &["Eggs", "Spinach", "Tomatoes", "Feta cheese", "Olive oil"], "15 minutes", (320, "22g", "8g", "22g")),
        meal("b3", "Avocado Toast", Breakfast, "Whole grain toast with avocado, eggs, and seasoning",
            &["Whole grain bread", "Avocado", "Eggs", "Salt", "Pepper", "Red pepper flakes"], "12 minutes", (350, "15g", "30g", "18g")),
        meal("l1", "Chicken & Quinoa Bowl", Lunch, "Grilled chicken with quinoa and mixed vegetables",
            &["Chicken breast", "Quinoa", "Bell peppers", "Zucchini", "Olive oil"], "20 minutes", (420, "35g", "40g", "12g")),
        meal("l2", "Tuna Salad Wrap", Lunch, "Tuna mixed with Greek yogurt in a whole grain wrap with vegetables",
            &["Tuna", "Greek yogurt", "Whole grain wrap", "Lettuce", "Tomato", "Cucumber"], "10 minutes", (380, "30g", "35g", "10g")),
        meal("l3", "Lentil Soup", Lunch, "Hearty lentil soup with vegetables and herbs",
            &["Lentils", "Carrots", "Celery", "Onion", "Garlic", "Vegetable broth"], "30 minutes", (310, "18g", "50g", "3g")),
        meal("d1", "Baked Salmon", Dinner, "Baked salmon with roasted vegetables and quinoa",
            &["Salmon fillet", "Broccoli", "Carrots", "Quinoa", "Lemon", "Olive oil"], "25 minutes", (450, "35g", "30g", "20g")),
        meal("d2", "Turkey Chili", Dinner, "Lean turkey chili with beans and vegetables",
            &["Ground turkey", "Kidney beans", "Black beans", "Tomatoes", "Bell peppers", "Onion"], "40 minutes", (380, "30g", "40g", "8g")),
        meal("d3", "Stir-Fry Tofu", Dinner, "Tofu stir-fried with mixed vegetables and brown rice",
            &["Tofu", "Broccoli", "Carrots", "Snow peas", "Brown rice", "Soy sauce"], "20 minutes", (340, "20g", "45g", "10g")),
        meal("s1", "Greek Yogurt & Berries", Snacks, "Greek yogurt with mixed berries and honey",
            &["Greek yogurt", "Mixed berries", "Honey", "Chia seeds"], "5 minutes", (180, "15g", "20g", "3g")),
        meal("s2", "Protein Smoothie", Snacks, "Protein shake with banana, peanut butter, and almond milk",
            &["Protein powder", "Banana", "Peanut butter", "Almond milk", "Ice"], "5 minutes", (250, "25g", "25g", "8g")),
        meal("s3", "Hummus & Veggies", Snacks, "Hummus with carrot and cucumber sticks",
            &["Hummus", "Carrots", "Cucumber", "Bell peppers"], "5 minutes", (150, "6g", "15g", "8g")),
    ]
}
