//! Integration tests for onboarding and preferences

mod common;

use axum::http::StatusCode;
use common::{json, test_config, TestApp};
use fitcoach_backend::config::{AppConfig, SessionConfig};
use serde_json::json as body;

async fn start(app: &TestApp) -> String {
    let (status, response) = app.post_empty("/api/v1/onboarding").await;
    assert_eq!(status, StatusCode::CREATED);
    let view = json(&response);
    assert_eq!(view["step"], "welcome");
    assert_eq!(view["stepCount"], 7);
    view["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_goal_step_requires_answer() {
    let app = TestApp::new().await;
    let id = start(&app).await;
    let base = format!("/api/v1/onboarding/{}", id);

    let (status, response) = app.post_empty(&format!("{}/next", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&response)["step"], "goal");

    let (status, response) = app.post_empty(&format!("{}/next", base)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&response)["error"]["message"], "Please choose a fitness goal");

    app.patch(&base, &body!({"goal": "build_muscle"}).to_string()).await;
    let (status, response) = app.post_empty(&format!("{}/next", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&response)["step"], "fitness_level");
}

#[tokio::test]
async fn test_back_at_first_step_stays() {
    let app = TestApp::new().await;
    let id = start(&app).await;

    let (status, response) = app
        .post_empty(&format!("/api/v1/onboarding/{}/back", id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&response)["stepIndex"], 0);
}

#[tokio::test]
async fn test_complete_before_review_conflicts() {
    let app = TestApp::new().await;
    let id = start(&app).await;

    let (status, response) = app
        .post_empty(&format!("/api/v1/onboarding/{}/complete", id))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json(&response)["error"]["code"], "CONFLICT");

    // The wizard stays open and nothing is written
    let (status, _) = app.get(&format!("/api/v1/onboarding/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.state.context.generation().await, 0);
}

async fn walk_to_review(app: &TestApp, base: &str) {
    app.patch(
        base,
        &body!({
            "goal": "build_muscle",
            "fitnessLevel": "intermediate",
            "equipment": "full_gym",
            "workoutMinutes": "45",
            "mealPrepMinutes": "20"
        })
        .to_string(),
    )
    .await;
    for _ in 0..6 {
        let (status, _) = app.post_empty(&format!("{}/next", base)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_back_from_review_blocks_complete() {
    let app = TestApp::new().await;
    let id = start(&app).await;
    let base = format!("/api/v1/onboarding/{}", id);
    walk_to_review(&app, &base).await;

    let (_, response) = app.post_empty(&format!("{}/back", base)).await;
    assert_eq!(json(&response)["step"], "dietary_preferences");

    let (status, _) = app.post_empty(&format!("{}/complete", base)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(app.state.context.generation().await, 0);

    let (_, response) = app.get("/api/v1/preferences").await;
    assert_eq!(json(&response)["onboardingComplete"], false);

    // Answers survive; moving forward again completes
    let (status, response) = app.get(&base).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&response)["form"]["goal"], "build_muscle");

    app.post_empty(&format!("{}/next", base)).await;
    let (status, response) = app.post_empty(&format!("{}/complete", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&response)["goal"], "build_muscle");
    assert_eq!(app.state.context.generation().await, 1);

    let (status, _) = app.post_empty(&format!("{}/complete", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_close_abandons_wizard() {
    let app = TestApp::new().await;
    let id = start(&app).await;
    let base = format!("/api/v1/onboarding/{}", id);

    let (status, _) = app.delete(&base).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.state.onboarding_sessions.len().await, 0);

    let (status, _) = app.get(&base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.delete(&base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_idle_wizard_expires() {
    let app = TestApp::with_config(AppConfig {
        sessions: SessionConfig {
            idle_timeout_secs: 0,
        },
        ..test_config()
    })
    .await;
    let id = start(&app).await;

    let (status, response) = app.get(&format!("/api/v1/onboarding/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&response)["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_full_onboarding_saves_preferences() {
    let app = TestApp::new().await;
    let id = start(&app).await;
    let base = format!("/api/v1/onboarding/{}", id);

    app.patch(
        &base,
        &body!({
            "goal": "lose_weight",
            "fitnessLevel": "beginner",
            "equipment": "minimal",
            "workoutMinutes": "30",
            "mealPrepMinutes": "15",
            "toggleDietary": ["vegetarian", "gluten_free"]
        })
        .to_string(),
    )
    .await;

    for _ in 0..6 {
        let (status, _) = app.post_empty(&format!("{}/next", base)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = app.post_empty(&format!("{}/next", base)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, response) = app.post_empty(&format!("{}/complete", base)).await;
    assert_eq!(status, StatusCode::OK);
    let prefs = json(&response);
    assert_eq!(prefs["goal"], "lose_weight");
    assert_eq!(prefs["timeAvailability"]["workout"], "30");

    // The wizard is consumed
    let (status, _) = app.get(&base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let restarted = app.restart().await;
    let (_, response) = restarted.get("/api/v1/preferences").await;
    let prefs = json(&response);
    assert_eq!(prefs["onboardingComplete"], true);
    assert_eq!(prefs["fitnessLevel"], "beginner");
    assert_eq!(prefs["dietaryPreferences"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_preferences_shallow_merge() {
    let app = TestApp::new().await;

    app.put("/api/v1/preferences", &body!({"goal": "build_muscle"}).to_string())
        .await;
    let (status, response) = app
        .put("/api/v1/preferences", &body!({"equipment": "full_gym"}).to_string())
        .await;
    let prefs = json(&response);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(prefs["goal"], "build_muscle");
    assert_eq!(prefs["equipment"], "full_gym");
    assert_eq!(prefs["onboardingComplete"], false);
}

#[tokio::test]
async fn test_preferences_reject_bad_minutes() {
    let app = TestApp::new().await;

    let (status, response) = app
        .put(
            "/api/v1/preferences",
            &body!({"timeAvailability": {"workout": "soon"}}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&response)["error"]["field"], "timeAvailability.workout");
}
