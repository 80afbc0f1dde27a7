//! Built-in sample data used whenever the AI gateway cannot deliver
//!
//! Every value here passes the same schema validation applied to model
//! replies, so callers can treat a fallback exactly like a real answer.

use crate::plans::{
    Feedback, NutritionFacts, NutritionPlan, PlannedExercise, PlannedMeal, Recommendations, Reps,
    WorkoutPlan,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn facts(calories: u32, protein: &str, carbs: &str, fats: &str) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein: protein.to_string(),
        carbs: carbs.to_string(),
        fats: fats.to_string(),
    }
}

/// Sample daily nutrition plan
pub fn sample_nutrition_plan() -> NutritionPlan {
    NutritionPlan {
        daily_meals: vec![
            PlannedMeal {
                name: "Protein-Packed Breakfast".to_string(),
                description: "A quick, filling breakfast with plenty of protein to start your day"
                    .to_string(),
                ingredients: strings(&[
                    "1/2 cup rolled oats",
                    "1 scoop protein powder",
                    "1 tbsp chia seeds",
                    "1/2 banana",
                    "1 cup almond milk",
                ]),
                prep_time: "10 minutes".to_string(),
                nutrition_facts: facts(350, "25g", "40g", "10g"),
            },
            PlannedMeal {
                name: "Energizing Lunch Bowl".to_string(),
                description: "Balanced lunch bowl with vegetables, protein and complex carbs"
                    .to_string(),
                ingredients: strings(&[
                    "1 cup quinoa",
                    "1/2 cup black beans",
                    "1 cup mixed vegetables",
                    "1/4 avocado",
                    "2 tbsp lime dressing",
                ]),
                prep_time: "15 minutes".to_string(),
                nutrition_facts: facts(420, "18g", "65g", "12g"),
            },
            PlannedMeal {
                name: "Satisfying Dinner".to_string(),
                description: "Light yet satisfying dinner with lean protein and vegetables"
                    .to_string(),
                ingredients: strings(&[
                    "4 oz tofu",
                    "2 cups mixed vegetables",
                    "1 tbsp olive oil",
                    "1 tsp herbs and spices",
                    "1/2 cup brown rice",
                ]),
                prep_time: "20 minutes".to_string(),
                nutrition_facts: facts(380, "22g", "35g", "15g"),
            },
        ],
        tips: strings(&[
            "Stay hydrated by drinking at least 8 glasses of water daily",
            "Eat slowly and mindfully to better recognize fullness signals",
            "Aim for a colorful plate to ensure varied nutrient intake",
            "Prepare meals in advance to avoid unhealthy convenience options",
        ]),
    }
}

fn circuit_exercise(name: &str, reps: u32, description: &str) -> PlannedExercise {
    PlannedExercise {
        name: name.to_string(),
        sets: 3,
        reps: Reps::Count(reps),
        rest_time: "30".to_string(),
        description: description.to_string(),
    }
}

/// Sample workout plan
pub fn sample_workout_plan() -> WorkoutPlan {
    WorkoutPlan {
        name: "Beginner Weight Loss Circuit".to_string(),
        duration: "30".to_string(),
        exercises: vec![
            circuit_exercise(
                "Bodyweight Squats",
                12,
                "Stand with feet shoulder-width apart, lower your body as if sitting in a chair, then return to standing position.",
            ),
            circuit_exercise(
                "Modified Push-ups",
                8,
                "Place hands shoulder-width apart on elevated surface (counter, bench), lower chest toward surface, then push back up.",
            ),
            circuit_exercise(
                "Resistance Band Rows",
                12,
                "Secure band to door handle, hold ends with arms extended, pull band toward body keeping elbows close to sides.",
            ),
            circuit_exercise(
                "Glute Bridges",
                15,
                "Lie on back with knees bent, feet flat on floor. Push through heels to lift hips toward ceiling, then lower.",
            ),
            circuit_exercise(
                "Standing Lateral Raises",
                10,
                "Hold resistance bands or light dumbbells at sides, raise arms out to shoulder height, then lower slowly.",
            ),
        ],
        tips: strings(&[
            "Focus on proper form rather than speed",
            "Breathe out during the exertion phase of each exercise",
            "If you can't complete all reps, that's okay - build up gradually",
            "Try to increase either reps or resistance each week for progression",
        ]),
    }
}

pub fn sample_recommendations() -> Recommendations {
    Recommendations {
        nutrition: sample_nutrition_plan(),
        workout: sample_workout_plan(),
    }
}

pub fn sample_feedback() -> Feedback {
    Feedback {
        feedback: "You're making steady progress! You've completed 3 workouts and followed 7 meals from your plan.".to_string(),
        suggestions: strings(&[
            "Try to increase your workout frequency to 4 times per week",
            "Consider adding more protein to your breakfast to feel fuller longer",
            "Track your water intake to ensure proper hydration",
        ]),
        next_steps: "Focus on consistency with your workouts this week, and try to prepare your lunches in advance to avoid unplanned meals.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_samples_pass_schema_validation() {
        assert!(sample_recommendations().validate().is_ok());
        assert!(sample_feedback().validate().is_ok());
    }

    #[test]
    fn test_sample_nutrition_calories() {
        assert_eq!(sample_nutrition_plan().total_calories(), 1150);
    }
}
