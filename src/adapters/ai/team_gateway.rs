//! LLM-backed TeamGateway implementation

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::prompts::{grouping_prompt, questionnaire_prompt, JSON_SYSTEM_INSTRUCTION};
use super::schemas::{grouping_schema, questionnaire_schema};
use crate::domain::event::{validate_assignment, EventDetails, Group, GroupMember, Participant, Question, QuestionType};
use crate::domain::foundation::BatchStamp;
use crate::domain::roster::synthesize_participants;
use crate::ports::{AIError, AIProvider, CompletionRequest, GatewayError, RequestMetadata, TeamGateway};

/// Banner text for any questionnaire failure.
pub const QUESTIONNAIRE_FAILURE: &str =
    "Failed to generate questionnaire. Please check your inputs and try again.";

/// Banner text for any grouping failure.
pub const GROUPING_FAILURE: &str = "Failed to form groups. Please try again.";

const QUESTION_ID_PREFIX: &str = "q";
const GROUP_ID_PREFIX: &str = "g";

const QUESTIONNAIRE_TEMPERATURE: f32 = 0.7;
const GROUPING_TEMPERATURE: f32 = 0.5;

/// Question as the model returns it, before an id is stamped.
#[derive(Debug, Deserialize)]
struct DraftedQuestion {
    text: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    #[serde(default)]
    options: Option<Vec<String>>,
}

/// Group as the model returns it, before an id is stamped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftedGroup {
    name: String,
    members: Vec<GroupMember>,
    justification: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    risks: Vec<String>,
    compatibility_score: f64,
}

/// Gateway that drafts questionnaires and groupings through an [`AIProvider`]
/// and synthesizes participants locally.
pub struct LlmTeamGateway {
    ai_provider: Arc<dyn AIProvider>,
    mock_delay: Duration,
}

impl LlmTeamGateway {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            mock_delay: Duration::ZERO,
        }
    }

    /// Sets the artificial delay before synthesized participants are returned.
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    fn metadata(operation: &str) -> RequestMetadata {
        RequestMetadata::new(operation, format!("{}-{}", operation, uuid::Uuid::new_v4()))
    }

    /// Runs a completion and returns its text, with empty text read as `[]`.
    async fn complete_json(&self, request: CompletionRequest) -> Result<String, AIError> {
        let operation = request.metadata.operation.clone();
        tracing::debug!(
            operation = %operation,
            trace_id = %request.metadata.trace_id,
            prompt_len = request.prompt.len(),
            "Sending model request"
        );

        let response = self.ai_provider.complete(request).await?;
        tracing::debug!(
            operation = %operation,
            reply_len = response.content.len(),
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Model reply received"
        );

        let text = response.content.trim();
        Ok(if text.is_empty() {
            "[]".to_string()
        } else {
            text.to_string()
        })
    }

    /// Maps a provider failure onto the organizer-facing error.
    fn provider_failure(err: AIError, operation: &str, generic: &str) -> GatewayError {
        tracing::error!(operation, error = %err, "Model request failed");
        match err {
            AIError::MissingCredential(detail) => GatewayError::Configuration {
                detail: format!("No API key available ({})", detail),
                message: generic.to_string(),
            },
            AIError::AuthenticationFailed => GatewayError::Configuration {
                detail: "The API key was rejected".to_string(),
                message: generic.to_string(),
            },
            _ => GatewayError::Generation(generic.to_string()),
        }
    }
}

#[async_trait]
impl TeamGateway for LlmTeamGateway {
    async fn draft_questionnaire(
        &self,
        details: &EventDetails,
    ) -> Result<Vec<Question>, GatewayError> {
        const OPERATION: &str = "draft_questionnaire";

        let request = CompletionRequest::new(questionnaire_prompt(details), Self::metadata(OPERATION))
            .with_system_instruction(JSON_SYSTEM_INSTRUCTION)
            .with_temperature(QUESTIONNAIRE_TEMPERATURE)
            .with_response_schema(questionnaire_schema());

        let text = self
            .complete_json(request)
            .await
            .map_err(|e| Self::provider_failure(e, OPERATION, QUESTIONNAIRE_FAILURE))?;

        let drafted = parse_questions(&text).map_err(|e| {
            tracing::warn!(operation = OPERATION, error = %e, "Unparsable questionnaire reply");
            GatewayError::Generation(QUESTIONNAIRE_FAILURE.to_string())
        })?;

        let stamp = BatchStamp::next();
        let questions: Vec<Question> = drafted
            .into_iter()
            .enumerate()
            .map(|(index, q)| Question {
                id: stamp.item_id(QUESTION_ID_PREFIX, index),
                text: q.text,
                question_type: q.question_type,
                options: q.options,
            })
            .collect();

        tracing::info!(
            event = %details.event_name,
            questions = questions.len(),
            "Questionnaire drafted"
        );
        Ok(questions)
    }

    async fn synthesize_participants(
        &self,
        count: usize,
        questions: &[Question],
        details: &EventDetails,
    ) -> Result<Vec<Participant>, GatewayError> {
        if !self.mock_delay.is_zero() {
            tokio::time::sleep(self.mock_delay).await;
        }

        let stamp = BatchStamp::next();
        let mut rng = rand::thread_rng();
        let participants = synthesize_participants(&mut rng, count, questions, stamp);

        tracing::info!(
            event = %details.event_name,
            count = participants.len(),
            "Mock participants synthesized"
        );
        Ok(participants)
    }

    async fn compute_groupings(
        &self,
        details: &EventDetails,
        questions: &[Question],
        participants: &[Participant],
    ) -> Result<Vec<Group>, GatewayError> {
        const OPERATION: &str = "compute_groupings";

        let prompt = grouping_prompt(details, questions, participants).map_err(|e| {
            tracing::error!(operation = OPERATION, error = %e, "Failed to encode participants");
            GatewayError::Generation(GROUPING_FAILURE.to_string())
        })?;

        let request = CompletionRequest::new(prompt, Self::metadata(OPERATION))
            .with_temperature(GROUPING_TEMPERATURE)
            .with_response_schema(grouping_schema());

        let text = self
            .complete_json(request)
            .await
            .map_err(|e| Self::provider_failure(e, OPERATION, GROUPING_FAILURE))?;

        let drafted = parse_groups(&text).map_err(|e| {
            tracing::warn!(operation = OPERATION, error = %e, "Unparsable grouping reply");
            GatewayError::Generation(GROUPING_FAILURE.to_string())
        })?;

        let stamp = BatchStamp::next();
        let groups: Vec<Group> = drafted
            .into_iter()
            .enumerate()
            .map(|(index, g)| Group {
                id: stamp.item_id(GROUP_ID_PREFIX, index),
                name: g.name,
                members: g.members,
                justification: g.justification,
                strengths: g.strengths,
                risks: g.risks,
                compatibility_score: g.compatibility_score,
            })
            .collect();

        if let Err(violation) = validate_assignment(&groups, participants) {
            tracing::warn!(
                operation = OPERATION,
                violation = %violation,
                "Grouping reply rejected"
            );
            return Err(GatewayError::Generation(GROUPING_FAILURE.to_string()));
        }

        tracing::info!(
            event = %details.event_name,
            groups = groups.len(),
            participants = participants.len(),
            "Groups formed"
        );
        Ok(groups)
    }
}

fn parse_questions(text: &str) -> Result<Vec<DraftedQuestion>, serde_json::Error> {
    serde_json::from_str(text)
}

fn parse_groups(text: &str) -> Result<Vec<DraftedGroup>, serde_json::Error> {
    serde_json::from_str(text)
}
