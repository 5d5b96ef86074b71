//! End-to-end wizard runs against a scripted model.
//!
//! The controller, reducer, gateway and in-memory store are all real; only
//! the `AIProvider` is replaced by `MockAIProvider`.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{json, Value};
use teamcraft::adapters::ai::{
    LlmTeamGateway, MockAIProvider, MockError, MockResponse, GROUPING_FAILURE,
    INSTRUCTIONS_HEADING, PARTICIPANTS_HEADING, QUESTIONNAIRE_FAILURE,
};
use teamcraft::adapters::storage::InMemorySessionStore;
use teamcraft::application::WizardController;
use teamcraft::domain::event::{EventDetails, QuestionType};
use teamcraft::domain::wizard::{WizardEvent, WizardStep};
use teamcraft::ports::CompletionRequest;

// ════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════

fn retro_week() -> EventDetails {
    EventDetails {
        event_name: "Retro Week".to_string(),
        context: "A week of retrospectives across product teams".to_string(),
        group_size: "3".to_string(),
        matching_rules: "Mix teams and seniority".to_string(),
        mandatory_topics: "Team, Mood".to_string(),
        matching_philosophy: "Fresh perspectives".to_string(),
    }
}

fn five_questions() -> String {
    json!([
        { "text": "Which team are you on?", "type": "choice", "options": ["Platform", "Mobile", "Web"] },
        { "text": "How was your sprint?", "type": "scale" },
        { "text": "Would you facilitate?", "type": "boolean" },
        { "text": "What should we stop doing?", "type": "text" },
        { "text": "Years at the company?", "type": "scale" }
    ])
    .to_string()
}

/// Participant ids embedded in a grouping prompt.
fn prompt_participant_ids(prompt: &str) -> Vec<String> {
    let start = prompt.find(PARTICIPANTS_HEADING).expect("participants heading")
        + PARTICIPANTS_HEADING.len();
    let end = prompt.find(INSTRUCTIONS_HEADING).expect("instructions heading");
    let roster: Value = serde_json::from_str(prompt[start..end].trim()).expect("roster json");
    roster
        .as_array()
        .expect("roster array")
        .iter()
        .map(|p| p["id"].as_str().expect("id").to_string())
        .collect()
}

/// Model stand-in: five questions, then teams of three in roster order.
fn scripted_model(request: &CompletionRequest) -> MockResponse {
    match request.metadata.operation.as_str() {
        "draft_questionnaire" => MockResponse::text(five_questions()),
        "compute_groupings" => {
            let ids = prompt_participant_ids(&request.prompt);
            let groups: Vec<Value> = ids
                .chunks(3)
                .enumerate()
                .map(|(index, chunk)| {
                    json!({
                        "name": format!("Retro Squad {}", index + 1),
                        "members": chunk
                            .iter()
                            .map(|id| json!({ "id": id, "name": id, "role": "Facilitator" }))
                            .collect::<Vec<_>>(),
                        "justification": "Mixed teams",
                        "strengths": ["Variety"],
                        "risks": ["Unfamiliar faces"],
                        "compatibilityScore": 80
                    })
                })
                .collect();
            MockResponse::text(Value::Array(groups).to_string())
        }
        other => panic!("unexpected operation {}", other),
    }
}

fn controller(provider: MockAIProvider) -> WizardController {
    let gateway = LlmTeamGateway::new(Arc::new(provider));
    WizardController::new(Arc::new(InMemorySessionStore::new()), Arc::new(gateway))
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn retro_week_runs_from_setup_to_results() {
    let provider = MockAIProvider::new().with_responder(scripted_model);
    let controller = controller(provider.clone());
    let id = controller.start_session().await;

    let state = controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();
    assert_eq!(state.step(), WizardStep::Questionnaire);
    assert_eq!(state.questions().len(), 5);
    assert!(!state.is_loading());
    assert!(state.error().is_none());

    let question_ids: HashSet<&str> = state.questions().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(question_ids.len(), 5);

    let state = controller
        .handle(id, WizardEvent::ConfirmQuestionnaire)
        .await
        .unwrap();
    assert_eq!(state.step(), WizardStep::Collection);

    let state = controller
        .handle(id, WizardEvent::GenerateMocks { count: 6 })
        .await
        .unwrap();
    assert_eq!(state.participants().len(), 6);
    let participant_ids: HashSet<String> =
        state.participants().iter().map(|p| p.id.clone()).collect();
    assert_eq!(participant_ids.len(), 6);
    for participant in state.participants() {
        assert_eq!(participant.answers.len(), 5);
        for question in state.questions() {
            let answer = &participant.answers[&question.id];
            match question.question_type {
                QuestionType::Scale => {
                    let value: u8 = answer.parse().unwrap();
                    assert!((1..=10).contains(&value));
                }
                QuestionType::Boolean => assert!(answer == "Yes" || answer == "No"),
                QuestionType::Choice => {
                    assert!(question.options.as_ref().unwrap().contains(answer))
                }
                QuestionType::Text => assert!(!answer.is_empty()),
            }
        }
    }

    let state = controller.handle(id, WizardEvent::Analyze).await.unwrap();
    assert_eq!(state.step(), WizardStep::Results);
    assert_eq!(state.groups().len(), 2);
    assert!(state.groups().iter().all(|g| g.members.len() == 3));

    let grouped: HashSet<String> = state
        .groups()
        .iter()
        .flat_map(|g| g.member_ids().map(str::to_string))
        .collect();
    assert_eq!(grouped, participant_ids);

    // Questionnaire and grouping went to the model; synthesis stayed local.
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn two_mock_batches_never_share_ids() {
    let controller = controller(MockAIProvider::new().with_responder(scripted_model));
    let id = controller.start_session().await;
    controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::ConfirmQuestionnaire)
        .await
        .unwrap();

    controller
        .handle(id, WizardEvent::GenerateMocks { count: 4 })
        .await
        .unwrap();
    let state = controller
        .handle(id, WizardEvent::GenerateMocks { count: 4 })
        .await
        .unwrap();

    let ids: HashSet<&str> = state.participants().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(state.participants().len(), 8);
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn failed_grouping_returns_to_collection_with_roster_intact() {
    let provider = MockAIProvider::new()
        .with_response(five_questions())
        .with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        });
    let controller = controller(provider);
    let id = controller.start_session().await;

    controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::ConfirmQuestionnaire)
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::GenerateMocks { count: 6 })
        .await
        .unwrap();

    let state = controller.handle(id, WizardEvent::Analyze).await.unwrap();
    assert_eq!(state.step(), WizardStep::Collection);
    assert_eq!(state.error(), Some(GROUPING_FAILURE));
    assert_eq!(state.participants().len(), 6);
    assert!(state.groups().is_empty());
    assert!(!state.is_loading());

    let state = controller
        .handle(id, WizardEvent::DismissError)
        .await
        .unwrap();
    assert!(state.error().is_none());
}

#[tokio::test]
async fn grouping_with_unknown_member_is_rejected() {
    let bogus_groups = json!([{
        "name": "Ghosts",
        "members": [{ "id": "nobody", "name": "Nobody" }],
        "justification": "n/a",
        "compatibilityScore": 50
    }])
    .to_string();
    let provider = MockAIProvider::new()
        .with_response(five_questions())
        .with_response(bogus_groups);
    let controller = controller(provider);
    let id = controller.start_session().await;

    controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::ConfirmQuestionnaire)
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::GenerateMocks { count: 3 })
        .await
        .unwrap();

    let state = controller.handle(id, WizardEvent::Analyze).await.unwrap();
    assert_eq!(state.step(), WizardStep::Collection);
    assert_eq!(state.error(), Some(GROUPING_FAILURE));
}

#[tokio::test]
async fn missing_credential_shows_the_generic_banner() {
    let provider = MockAIProvider::new().with_error(MockError::MissingCredential {
        message: "set API_KEY".to_string(),
    });
    let controller = controller(provider);
    let id = controller.start_session().await;

    let state = controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();

    assert_eq!(state.step(), WizardStep::Setup);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(QUESTIONNAIRE_FAILURE));
}

#[tokio::test]
async fn confirmed_reset_from_results_restores_the_initial_shape() {
    let controller = controller(MockAIProvider::new().with_responder(scripted_model));
    let id = controller.start_session().await;
    controller
        .handle(id, WizardEvent::SubmitDetails(retro_week()))
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::ConfirmQuestionnaire)
        .await
        .unwrap();
    controller
        .handle(id, WizardEvent::GenerateMocks { count: 6 })
        .await
        .unwrap();
    controller.handle(id, WizardEvent::Analyze).await.unwrap();

    let unconfirmed = controller
        .handle(id, WizardEvent::Reset { confirmed: false })
        .await
        .unwrap();
    assert_eq!(unconfirmed.step(), WizardStep::Results);

    let state = controller
        .handle(id, WizardEvent::Reset { confirmed: true })
        .await
        .unwrap();
    assert!(state.is_pristine());
}
