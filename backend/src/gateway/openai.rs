//! OpenAI-compatible HTTP client
//!
//! Talks to `{base_url}/chat/completions` and `{base_url}/images/generations`
//! with bearer auth. Works against OpenAI itself or any compatible server.

use super::{CoachingModel, CompletionRequest};
use crate::config::AiConfig;
use async_trait::async_trait;
use fitcoach_shared::GatewayError;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Image size requested from the image model
const IMAGE_SIZE: &str = "1024x1024";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'static str,
    quality: &'static str,
    response_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<Secret<String>>,
    chat_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(config: &AiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Network(format!("Failed to build HTTP client: {}", e)))?;

        let api_key = Some(config.api_key.trim())
            .filter(|k| !k.is_empty())
            .map(|k| Secret::new(k.to_string()));

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key.expose_secret()),
            None => request,
        }
    }

    /// POST `body` to `endpoint` and return the raw success body
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<String, GatewayError> {
        let request = self.client.post(self.api_url(endpoint)).json(body);

        let response = self.add_auth_header(request).send().await.map_err(|e| {
            error!("Failed to reach AI gateway: {}", e);
            GatewayError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: message,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl CoachingModel for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %self.chat_model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: &self.chat_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let text = self.post_json("chat/completions", &body).await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::Parse(format!("Malformed completion envelope: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(GatewayError::EmptyResponse)?;

        debug!(chars = content.len(), "Received completion");
        Ok(content)
    }

    #[instrument(skip(self, prompt), fields(model = %self.image_model))]
    async fn generate_image(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = ImageRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            quality: "standard",
            response_format: "b64_json",
        };

        let text = self.post_json("images/generations", &body).await?;
        let parsed: ImageResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::Parse(format!("Malformed image envelope: {}", e)))?;

        parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .ok_or(GatewayError::EmptyResponse)
    }
}
