//! Team Gateway Port - the three operations the wizard delegates.
//!
//! Drafting a questionnaire and computing groupings go through a model;
//! synthesizing participants is local but shares the port so the controller
//! treats every effect the same way.

use async_trait::async_trait;

use crate::domain::event::{EventDetails, Group, Participant, Question};

/// Failures surfaced to the organizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The service is not set up to make calls (e.g. no API credential).
    ///
    /// `detail` is for logs; the organizer sees the operation's `message`.
    #[error("configuration error: {detail}")]
    Configuration { detail: String, message: String },

    /// The call failed, or the reply could not be parsed or validated.
    #[error("{0}")]
    Generation(String),
}

impl GatewayError {
    /// The message stored in the wizard's error banner.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Configuration { message, .. } => message.clone(),
            GatewayError::Generation(message) => message.clone(),
        }
    }
}

/// Port for the wizard's content-producing operations.
#[async_trait]
pub trait TeamGateway: Send + Sync {
    /// Drafts questions tailored to the event.
    async fn draft_questionnaire(
        &self,
        details: &EventDetails,
    ) -> Result<Vec<Question>, GatewayError>;

    /// Produces `count` fake participants answering every question.
    async fn synthesize_participants(
        &self,
        count: usize,
        questions: &[Question],
        details: &EventDetails,
    ) -> Result<Vec<Participant>, GatewayError>;

    /// Partitions the participants into groups.
    async fn compute_groupings(
        &self,
        details: &EventDetails,
        questions: &[Question],
        participants: &[Participant],
    ) -> Result<Vec<Group>, GatewayError>;
}
