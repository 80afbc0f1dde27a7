//! AI gateway boundary
//!
//! [`CoachingModel`] is the seam between services and the remote model.
//! The production implementation speaks the OpenAI-compatible HTTP API;
//! [`DisabledModel`] stands in when no model is configured so that every
//! caller takes its static fallback path.

use async_trait::async_trait;
use fitcoach_shared::GatewayError;

mod openai;
pub mod prompts;

pub use openai::OpenAiClient;

/// One chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait CoachingModel: Send + Sync {
    /// Text of the first choice of a chat completion
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;

    /// Base64-encoded image for `prompt`
    async fn generate_image(&self, prompt: &str) -> Result<String, GatewayError>;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Model used when the AI gateway is turned off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledModel;

#[async_trait]
impl CoachingModel for DisabledModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
        Err(GatewayError::Disabled)
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Disabled)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
