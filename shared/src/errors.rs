//! Error types for the FitCoach application

use thiserror::Error;

/// User input that is missing or out of range
///
/// Reported inline; producing one never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Persistent key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Serialization error for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors at the AI recommendation gateway boundary
///
/// None of these reach the user; every caller falls back to static data.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("AI gateway is disabled")]
    Disabled,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Failed to parse model reply: {0}")]
    Parse(String),
}

impl GatewayError {
    /// True for failures caused by the reply content rather than transport
    pub fn is_parse(&self) -> bool {
        matches!(self, GatewayError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_message() {
        let err = ValidationError::for_field("goal", "Please choose a goal");
        assert_eq!(err.to_string(), "Please choose a goal");
        assert_eq!(err.field.as_deref(), Some("goal"));
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(GatewayError::Parse("bad".into()).is_parse());
        assert!(!GatewayError::EmptyResponse.is_parse());
    }
}
