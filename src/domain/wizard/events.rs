//! Inputs to the reducer and the side effects it requests.

use super::RequestTicket;
use crate::domain::event::{EventDetails, Group, Participant, Question};

/// Everything that can happen to a wizard session.
///
/// User intents come from the screens; the `*Drafted` / `*Synthesized` /
/// `*Computed` / `*Failed` variants report the outcome of an [`Effect`].
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SubmitDetails(EventDetails),
    QuestionnaireDrafted {
        ticket: RequestTicket,
        questions: Vec<Question>,
    },
    QuestionnaireFailed {
        ticket: RequestTicket,
        message: String,
    },
    ConfirmQuestionnaire,
    GenerateMocks {
        count: usize,
    },
    ParticipantsSynthesized {
        ticket: RequestTicket,
        participants: Vec<Participant>,
    },
    ParticipantsFailed {
        ticket: RequestTicket,
        message: String,
    },
    Analyze,
    GroupsComputed {
        ticket: RequestTicket,
        groups: Vec<Group>,
    },
    GroupingFailed {
        ticket: RequestTicket,
        message: String,
    },
    DismissError,
    Reset {
        confirmed: bool,
    },
}

impl WizardEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::SubmitDetails(_) => "submit_details",
            WizardEvent::QuestionnaireDrafted { .. } => "questionnaire_drafted",
            WizardEvent::QuestionnaireFailed { .. } => "questionnaire_failed",
            WizardEvent::ConfirmQuestionnaire => "confirm_questionnaire",
            WizardEvent::GenerateMocks { .. } => "generate_mocks",
            WizardEvent::ParticipantsSynthesized { .. } => "participants_synthesized",
            WizardEvent::ParticipantsFailed { .. } => "participants_failed",
            WizardEvent::Analyze => "analyze",
            WizardEvent::GroupsComputed { .. } => "groups_computed",
            WizardEvent::GroupingFailed { .. } => "grouping_failed",
            WizardEvent::DismissError => "dismiss_error",
            WizardEvent::Reset { .. } => "reset",
        }
    }
}

/// A gateway call the controller must run on the reducer's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DraftQuestionnaire {
        ticket: RequestTicket,
        details: EventDetails,
    },
    SynthesizeParticipants {
        ticket: RequestTicket,
        count: usize,
        questions: Vec<Question>,
        details: EventDetails,
    },
    ComputeGroupings {
        ticket: RequestTicket,
        details: EventDetails,
        questions: Vec<Question>,
        participants: Vec<Participant>,
    },
}

impl Effect {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Effect::DraftQuestionnaire { ticket, .. }
            | Effect::SynthesizeParticipants { ticket, .. }
            | Effect::ComputeGroupings { ticket, .. } => *ticket,
        }
    }
}
