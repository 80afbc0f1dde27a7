//! Integration tests for the AI gateway against a mock OpenAI-compatible server

mod common;

use axum::http::StatusCode;
use common::{json, TestApp};
use fitcoach_backend::config::AiConfig;
use fitcoach_backend::gateway::{CoachingModel, CompletionRequest, OpenAiClient};
use fitcoach_shared::samples::{sample_feedback, sample_recommendations};
use fitcoach_shared::GatewayError;
use serde_json::json as body;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ai_config(server: &MockServer) -> AiConfig {
    AiConfig {
        enabled: true,
        base_url: format!("{}/v1", server.uri()),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        ..AiConfig::default()
    }
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    }))
}

fn request() -> CompletionRequest {
    CompletionRequest {
        system: "system".to_string(),
        user: "user".to_string(),
        temperature: 0.7,
        max_tokens: 100,
    }
}

async fn app_with(server: &MockServer) -> TestApp {
    let client = OpenAiClient::new(&ai_config(server)).unwrap();
    TestApp::with_model(Arc::new(client)).await
}

#[tokio::test]
async fn test_complete_sends_bearer_and_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(body!({"model": "gpt-4", "max_tokens": 100})))
        .respond_with(completion("hello"))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&ai_config(&server)).unwrap();
    assert_eq!(client.complete(request()).await.unwrap(), "hello");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(body!({"error": {"message": "Rate limit exceeded"}})),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&ai_config(&server)).unwrap();
    match client.complete(request()).await {
        Err(GatewayError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("Rate limit exceeded"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body!({"choices": []})))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&ai_config(&server)).unwrap();
    assert!(matches!(
        client.complete(request()).await,
        Err(GatewayError::EmptyResponse)
    ));
}

#[tokio::test]
async fn test_image_returns_base64() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(body!({"model": "dall-e-3", "response_format": "b64_json"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(body!({"data": [{"b64_json": "aW1n"}]})),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&ai_config(&server)).unwrap();
    assert_eq!(client.generate_image("prompt").await.unwrap(), "aW1n");
}

#[tokio::test]
async fn test_fenced_plan_reply_is_stored() {
    let server = MockServer::start().await;
    let mut plans = sample_recommendations();
    plans.workout.name = "Mock Strength Day".to_string();
    let reply = format!(
        "Sure! Here is your plan:\n```json\n{}\n```",
        serde_json::to_string_pretty(&plans).unwrap()
    );
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(&reply))
        .mount(&server)
        .await;

    let app = app_with(&server).await;
    let (status, response) = app.post_empty("/api/v1/plans/refresh").await;
    let view = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["fallback"], false);
    assert_eq!(view["applied"], true);
    assert_eq!(view["workout"]["name"], "Mock Strength Day");

    let (_, response) = app.get("/api/v1/plans").await;
    assert_eq!(json(&response)["workout"]["name"], "Mock Strength Day");
}

#[tokio::test]
async fn test_server_error_falls_back_to_sample_plans() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let app = app_with(&server).await;
    let (status, response) = app.post_empty("/api/v1/plans/refresh").await;
    let view = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["fallback"], true);
    assert_eq!(
        view["workout"]["name"],
        sample_recommendations().workout.name.as_str()
    );
}

#[tokio::test]
async fn test_truncated_json_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(r#"{"nutrition": {"dailyMeals": [{"name": "Oats""#))
        .mount(&server)
        .await;

    let app = app_with(&server).await;
    let (status, response) = app.get("/api/v1/feedback").await;
    let feedback = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(feedback["fallback"], true);
    assert_eq!(feedback["data"]["feedback"], sample_feedback().feedback.as_str());
}

#[tokio::test]
async fn test_chat_reply_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion("  Try three sets of ten.  "))
        .mount(&server)
        .await;

    let app = app_with(&server).await;
    let (status, response) = app
        .post("/api/v1/chat", &body!({"message": "How many sets?"}).to_string())
        .await;
    let reply = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["reply"], "Try three sets of ten.");
    assert_eq!(reply["fallback"], false);
}

#[tokio::test]
async fn test_generated_reminders_are_split() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(
            "Workout Reminder: Leg day is calling!\n\nMeal Reminder: Pack a protein lunch.",
        ))
        .mount(&server)
        .await;

    let app = app_with(&server).await;
    let (status, response) = app.post_empty("/api/v1/reminders/generate").await;
    let reminders = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reminders["success"], true);
    assert_eq!(reminders["workoutReminder"], "Leg day is calling!");
    assert_eq!(reminders["mealReminder"], "Pack a protein lunch.");
}
