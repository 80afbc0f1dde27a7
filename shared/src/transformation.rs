//! Body transformation projection and image prompt

use crate::errors::ValidationError;
use crate::validation::{validate_timeframe_weeks, validate_weight};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Physique {
    Slim,
    Athletic,
    Toned,
    Muscular,
    Bulky,
}

impl fmt::Display for Physique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Physique::Slim => "slim",
            Physique::Athletic => "athletic",
            Physique::Toned => "toned",
            Physique::Muscular => "muscular",
            Physique::Bulky => "bulky",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    pub gender: Gender,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub desired_physique: Physique,
    pub timeframe_weeks: u32,
}

impl BodyMetrics {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_weight(self.current_weight_kg)
            .map_err(|msg| ValidationError::for_field("currentWeightKg", msg))?;
        validate_weight(self.target_weight_kg)
            .map_err(|msg| ValidationError::for_field("targetWeightKg", msg))?;
        validate_timeframe_weeks(self.timeframe_weeks)
            .map_err(|msg| ValidationError::for_field("timeframeWeeks", msg))?;
        Ok(())
    }

    pub fn is_weight_loss(&self) -> bool {
        self.target_weight_kg < self.current_weight_kg
    }

    /// Absolute change in kg
    pub fn change_kg(&self) -> f64 {
        (self.target_weight_kg - self.current_weight_kg).abs()
    }

    /// Change as a percentage of the current weight
    pub fn change_percent(&self) -> f64 {
        self.change_kg() / self.current_weight_kg * 100.0
    }

    /// Prompt for a side-by-side silhouette image
    pub fn image_prompt(&self) -> String {
        let loss = self.is_weight_loss();
        format!(
            "A side-by-side comparison of a {gender}'s body transformation.\n\n\
             Left image: A {gender} with a {build} build weighing {current}kg.\n\n\
             Right image: The same {gender} after transformation to a {physique} physique weighing {target}kg after {weeks} weeks of fitness training.\n\n\
             The transformation shows {change:.1}kg of {kind}.\n\
             Simple silhouette style, no faces visible, focusing on body shape changes. No text labels.",
            gender = self.gender,
            build = if loss { "heavier" } else { "slimmer" },
            current = self.current_weight_kg,
            physique = self.desired_physique,
            target = self.target_weight_kg,
            weeks = self.timeframe_weeks,
            change = self.change_kg(),
            kind = if loss { "weight loss" } else { "muscle gain" },
        )
    }
}

/// Expected changes and advice for reaching the target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub weight_loss: bool,
    pub change_kg: f64,
    pub change_percent: f64,
    pub expected_changes: Vec<String>,
    pub recommendations: Vec<String>,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn project(metrics: &BodyMetrics) -> Result<Projection, ValidationError> {
    metrics.validate()?;

    let loss = metrics.is_weight_loss();
    let change = metrics.change_kg();
    let percent = metrics.change_percent();
    let male = metrics.gender == Gender::Male;
    let physique = metrics.desired_physique;
    let protein = if male { "1.8-2.2g" } else { "1.6-2.0g" };

    let (expected_changes, recommendations) = if loss {
        (
            vec![
                format!(
                    "Potential reduction of {:.1} kg ({:.1}% of current weight)",
                    change, percent
                ),
                format!(
                    "Decreased body fat percentage, especially in {} areas",
                    if male { "abdominal" } else { "hip and thigh" }
                ),
                format!(
                    "More defined {}",
                    if physique == Physique::Muscular { "musculature" } else { "body contours" }
                ),
                "Improved body proportions with a more balanced silhouette".to_string(),
            ],
            vec![
                "Maintain a calorie deficit of 500-750 calories per day for sustainable fat loss"
                    .to_string(),
                format!(
                    "Focus on high-protein foods ({} per kg of bodyweight) to preserve muscle",
                    protein
                ),
                format!(
                    "Incorporate {} 3-4 times per week",
                    if physique == Physique::Muscular {
                        "heavy resistance training"
                    } else {
                        "resistance training"
                    }
                ),
                "Add 2-3 cardio sessions (20-30 minutes) weekly for additional calorie burn"
                    .to_string(),
                format!(
                    "Stay consistent - this transformation will take approximately {} weeks",
                    metrics.timeframe_weeks
                ),
            ],
        )
    } else {
        (
            vec![
                format!(
                    "Potential gain of {:.1} kg ({:.1}% of current weight)",
                    change, percent
                ),
                format!(
                    "Increased muscle mass, particularly in {}",
                    if male {
                        "chest, shoulders, and arms"
                    } else {
                        "glutes, legs, and shoulders"
                    }
                ),
                format!(
                    "More {} physique with better definition",
                    if physique == Physique::Athletic { "athletic" } else { "muscular" }
                ),
                "Enhanced overall proportions with a stronger physical presence".to_string(),
            ],
            vec![
                "Consume a calorie surplus of 300-500 calories above maintenance".to_string(),
                format!("Prioritize protein intake ({} per kg of bodyweight)", protein),
                format!(
                    "Focus on progressive overload in your {}",
                    if physique == Physique::Bulky {
                        "compound exercises"
                    } else {
                        "strength training"
                    }
                ),
                "Allow adequate recovery between workouts (at least 48 hours per muscle group)"
                    .to_string(),
                format!(
                    "Be patient - building quality muscle takes time, expect this transformation to take {} weeks or more",
                    metrics.timeframe_weeks
                ),
            ],
        )
    };

    Ok(Projection {
        weight_loss: loss,
        change_kg: one_decimal(change),
        change_percent: one_decimal(percent),
        expected_changes,
        recommendations,
    })
}

/// Outcome of an image generation request; failures carry the reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransformationImage {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransformationImage {
    pub fn generated(image_data: String, timeframe_weeks: u32) -> Self {
        Self {
            success: true,
            image_data: Some(image_data),
            timeframe_weeks: Some(timeframe_weeks),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image_data: None,
            timeframe_weeks: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(current: f64, target: f64) -> BodyMetrics {
        BodyMetrics {
            gender: Gender::Female,
            current_weight_kg: current,
            target_weight_kg: target,
            desired_physique: Physique::Toned,
            timeframe_weeks: 12,
        }
    }

    #[test]
    fn test_weight_loss_projection() {
        let projection = project(&metrics(80.0, 72.0)).unwrap();
        assert!(projection.weight_loss);
        assert_eq!(projection.change_kg, 8.0);
        assert_eq!(projection.change_percent, 10.0);
        assert_eq!(
            projection.expected_changes[0],
            "Potential reduction of 8.0 kg (10.0% of current weight)"
        );
        assert!(projection.expected_changes[1].contains("hip and thigh"));
        assert_eq!(projection.expected_changes[2], "More defined body contours");
        assert!(projection.recommendations[0].contains("deficit"));
        assert!(projection.recommendations[1].contains("1.6-2.0g"));
        assert!(projection.recommendations[4].contains("approximately 12 weeks"));
    }

    #[test]
    fn test_gain_projection() {
        let mut male = metrics(60.0, 65.5);
        male.gender = Gender::Male;
        male.desired_physique = Physique::Bulky;

        let projection = project(&male).unwrap();
        assert!(!projection.weight_loss);
        assert_eq!(projection.change_kg, 5.5);
        assert_eq!(projection.change_percent, 9.2);
        assert_eq!(
            projection.expected_changes[0],
            "Potential gain of 5.5 kg (9.2% of current weight)"
        );
        assert!(projection.expected_changes[1].contains("chest, shoulders, and arms"));
        assert!(projection.recommendations[0].contains("surplus"));
        assert!(projection.recommendations[2].ends_with("compound exercises"));
    }

    #[test]
    fn test_out_of_range_metrics_rejected() {
        let err = project(&metrics(10.0, 70.0)).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("currentWeightKg"));

        let err = project(&metrics(70.0, 700.0)).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("targetWeightKg"));

        let mut long = metrics(70.0, 65.0);
        long.timeframe_weeks = 0;
        assert_eq!(project(&long).unwrap_err().field.as_deref(), Some("timeframeWeeks"));
    }

    #[test]
    fn test_image_prompt() {
        let prompt = metrics(80.0, 72.0).image_prompt();
        assert!(prompt.contains("a female's body transformation"));
        assert!(prompt.contains("heavier build weighing 80kg"));
        assert!(prompt.contains("toned physique weighing 72kg after 12 weeks"));
        assert!(prompt.contains("8.0kg of weight loss"));
    }
}
