//! The wizard driven through its HTTP surface.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use teamcraft::adapters::ai::{LlmTeamGateway, MockAIProvider};
use teamcraft::adapters::http::{app_router, WizardHandlers};
use teamcraft::adapters::storage::InMemorySessionStore;
use teamcraft::application::WizardController;
use tower::ServiceExt;

const SETUP_FORM: &str = "eventName=Retro+Week&groupSize=3&context=Sprint+retro\
    &matchingRules=Mix+teams&matchingPhilosophy=Balance&mandatoryTopics=Mood";

fn questions() -> String {
    json!([
        { "text": "How was your sprint?", "type": "scale" },
        { "text": "Favourite <ritual>?", "type": "choice", "options": ["Standup", "Demo"] }
    ])
    .to_string()
}

fn app(provider: MockAIProvider) -> Router {
    let gateway = LlmTeamGateway::new(Arc::new(provider));
    let controller =
        WizardController::new(Arc::new(InMemorySessionStore::new()), Arc::new(gateway))
            .with_max_mock_batch(30);
    app_router(
        WizardHandlers::new(controller, "gemini-2.5-flash", 1),
        Duration::from_secs(5),
    )
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post(app: &Router, uri: &str, form: &str) -> StatusCode {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn open_session(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

/// Polls the JSON snapshot until no request is in flight.
async fn settled_state(app: &Router, session: &str) -> Value {
    for _ in 0..200 {
        let (status, body) = get(app, &format!("{}/state", session)).await;
        assert_eq!(status, StatusCode::OK);
        let state: Value = serde_json::from_str(&body).unwrap();
        if state["isLoading"] == false {
            return state;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session never settled");
}

#[tokio::test]
async fn setup_to_collection_over_http() {
    let app = app(MockAIProvider::new().with_response(questions()));
    let session = open_session(&app).await;

    let (status, page) = get(&app, &session).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Define Your Event"));
    assert!(page.contains("Powered by gemini-2.5-flash"));

    assert_eq!(
        post(&app, &format!("{}/setup", session), SETUP_FORM).await,
        StatusCode::SEE_OTHER
    );
    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "questionnaire");
    assert_eq!(state["eventDetails"]["eventName"], "Retro Week");
    assert_eq!(state["questions"].as_array().unwrap().len(), 2);

    let (_, page) = get(&app, &session).await;
    assert!(page.contains("Review Questionnaire"));
    assert!(page.contains("Favourite &lt;ritual&gt;?"));

    assert_eq!(
        post(&app, &format!("{}/questionnaire/confirm", session), "").await,
        StatusCode::SEE_OTHER
    );
    assert_eq!(
        post(&app, &format!("{}/participants/mock", session), "count=5").await,
        StatusCode::SEE_OTHER
    );
    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "collection");
    assert_eq!(state["participants"].as_array().unwrap().len(), 5);

    let (_, page) = get(&app, &session).await;
    assert!(page.contains("Current Roster"));
    assert!(page.contains("Create Optimal Groups"));
}

#[tokio::test]
async fn loading_page_refreshes_and_second_submit_is_busy() {
    let provider = MockAIProvider::new()
        .with_response(questions())
        .with_delay(Duration::from_millis(100));
    let app = app(provider);
    let session = open_session(&app).await;

    post(&app, &format!("{}/setup", session), SETUP_FORM).await;

    let (_, page) = get(&app, &session).await;
    assert!(page.contains("http-equiv=\"refresh\""));
    assert!(page.contains("Thinking..."));
    assert_eq!(
        post(&app, &format!("{}/setup", session), SETUP_FORM).await,
        StatusCode::CONFLICT
    );

    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "questionnaire");
}

#[tokio::test]
async fn oversized_or_malformed_mock_count_is_422() {
    let app = app(MockAIProvider::new().with_response(questions()));
    let session = open_session(&app).await;
    post(&app, &format!("{}/setup", session), SETUP_FORM).await;
    settled_state(&app, &session).await;
    post(&app, &format!("{}/questionnaire/confirm", session), "").await;

    let mock = format!("{}/participants/mock", session);
    assert_eq!(
        post(&app, &mock, "count=31").await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        post(&app, &mock, "count=0").await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        post(&app, &mock, "count=lots").await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn reset_needs_confirmation() {
    let app = app(MockAIProvider::new().with_response(questions()));
    let session = open_session(&app).await;
    post(&app, &format!("{}/setup", session), SETUP_FORM).await;
    settled_state(&app, &session).await;

    post(&app, &format!("{}/reset", session), "").await;
    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "questionnaire");

    assert_eq!(
        post(&app, &format!("{}/reset", session), "confirm=yes").await,
        StatusCode::SEE_OTHER
    );
    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "setup");
    assert!(state["questions"].as_array().unwrap().is_empty());
    assert_eq!(state["eventDetails"]["eventName"], "");
}

#[tokio::test]
async fn failure_banner_can_be_dismissed() {
    let app = app(MockAIProvider::new().with_response("not json"));
    let session = open_session(&app).await;

    post(&app, &format!("{}/setup", session), SETUP_FORM).await;
    let state = settled_state(&app, &session).await;
    assert_eq!(state["step"], "setup");
    assert!(state["error"].is_string());

    let (_, page) = get(&app, &session).await;
    assert!(page.contains("role=\"alert\""));

    post(&app, &format!("{}/error/dismiss", session), "").await;
    let state = settled_state(&app, &session).await;
    assert!(state["error"].is_null());
}

#[tokio::test]
async fn malformed_session_id_is_404() {
    let app = app(MockAIProvider::new());
    let (status, page) = get(&app, "/sessions/not-a-session").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(page.contains("Session Not Found"));
}

#[tokio::test]
async fn abandoned_sessions_are_swept_and_then_404() {
    let gateway = LlmTeamGateway::new(Arc::new(MockAIProvider::new()));
    let controller =
        WizardController::new(Arc::new(InMemorySessionStore::new()), Arc::new(gateway));
    let app = app_router(
        WizardHandlers::new(controller.clone(), "gemini-2.5-flash", 1),
        Duration::from_secs(5),
    );

    let mut sessions = Vec::new();
    for _ in 0..50 {
        sessions.push(open_session(&app).await);
    }

    assert_eq!(controller.evict_idle_sessions(Duration::ZERO).await, 50);
    for session in &sessions {
        let (status, _) = get(&app, session).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
