//! Input validation functions
//!
//! Hand validators for user-entered values. Gateway reply schemas use the
//! `validator` derive instead (see `plans`).

/// Longest chat message accepted, in characters
pub const MAX_CHAT_MESSAGE_CHARS: usize = 500;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a transformation timeframe (1 week to 2 years)
pub fn validate_timeframe_weeks(weeks: u32) -> Result<(), String> {
    if weeks < 1 {
        return Err("Timeframe must be at least 1 week".to_string());
    }
    if weeks > 104 {
        return Err("Timeframe must be at most 104 weeks".to_string());
    }
    Ok(())
}

/// Validate a chat message before it is sent to the coach
pub fn validate_chat_message(message: &str) -> Result<(), String> {
    if message.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    if message.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err(format!(
            "Message must be at most {} characters",
            MAX_CHAT_MESSAGE_CHARS
        ));
    }
    Ok(())
}

/// Validate reminder days (0 = Sunday .. 6 = Saturday)
pub fn validate_reminder_days(days: &[u8]) -> Result<(), String> {
    if let Some(day) = days.iter().find(|d| **d > 6) {
        return Err(format!("Invalid day {}; expected 0 (Sunday) to 6 (Saturday)", day));
    }
    Ok(())
}

/// Validate a time budget picked during onboarding ("30", "45", ...)
pub fn validate_minutes(minutes: &str) -> Result<(), String> {
    match minutes.trim().parse::<u32>() {
        Ok(0) => Err("Minutes must be greater than zero".to_string()),
        Ok(m) if m > 1440 => Err("Minutes cannot exceed 24 hours".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err("Minutes must be a whole number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_timeframe() {
        assert!(validate_timeframe_weeks(1).is_ok());
        assert!(validate_timeframe_weeks(104).is_ok());
        assert!(validate_timeframe_weeks(0).is_err());
        assert!(validate_timeframe_weeks(105).is_err());
    }

    #[test]
    fn test_validate_chat_message() {
        assert!(validate_chat_message("How many rest days?").is_ok());
        assert!(validate_chat_message("").is_err());
        assert!(validate_chat_message("   \n").is_err());
        assert!(validate_chat_message(&"a".repeat(500)).is_ok());
        assert!(validate_chat_message(&"a".repeat(501)).is_err());
        // counted in characters, not bytes
        assert!(validate_chat_message(&"💪".repeat(500)).is_ok());
    }

    #[test]
    fn test_generated_messages() {
        for _ in 0..20 {
            let question: String = Sentence(3..12).fake();
            assert!(validate_chat_message(&question).is_ok());
        }
        let essay: String = Paragraph(60..80).fake();
        assert!(essay.chars().count() > MAX_CHAT_MESSAGE_CHARS);
        assert!(validate_chat_message(&essay).is_err());
    }

    #[test]
    fn test_validate_reminder_days() {
        assert!(validate_reminder_days(&[]).is_ok());
        assert!(validate_reminder_days(&[0, 3, 6]).is_ok());
        assert!(validate_reminder_days(&[1, 7]).is_err());
    }

    #[test]
    fn test_validate_minutes() {
        assert!(validate_minutes("30").is_ok());
        assert!(validate_minutes("0").is_err());
        assert!(validate_minutes("half an hour").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property 1: Weights inside the accepted range always pass
        #[test]
        fn prop_valid_weight_accepted(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        /// Property 2: Weights outside the range always fail
        #[test]
        fn prop_out_of_range_weight_rejected(
            weight in prop_oneof![0.0f64..19.99, 500.01f64..10000.0],
        ) {
            prop_assert!(validate_weight(weight).is_err());
        }
    }
}
