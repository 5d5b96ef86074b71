//! Pure reducer: `(state, event) -> state (+ effect)`.

use super::{Effect, RequestKind, RequestTicket, WizardError, WizardEvent, WizardState, WizardStep};
use crate::domain::foundation::{StateMachine, ValidationError};

/// How an event was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed (or was already in the requested shape).
    Applied,
    /// An unconfirmed reset; nothing happened.
    Ignored,
    /// A completion for a ticket that is no longer pending; discarded.
    Stale,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: WizardState,
    pub effect: Option<Effect>,
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: WizardState) -> Self {
        Self {
            state,
            effect: None,
            outcome: Outcome::Applied,
        }
    }

    fn with_effect(state: WizardState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
            outcome: Outcome::Applied,
        }
    }

    fn unchanged(state: &WizardState, outcome: Outcome) -> Self {
        Self {
            state: state.clone(),
            effect: None,
            outcome,
        }
    }
}

/// Applies `event` to `state`.
///
/// Illegal intents are rejected and leave the caller's state untouched.
/// Completions whose ticket is not pending come back as [`Outcome::Stale`].
pub fn apply(state: &WizardState, event: WizardEvent) -> Result<Transition, WizardError> {
    match event {
        WizardEvent::SubmitDetails(details) => {
            expect_idle(state, WizardStep::Setup, "submit event details")?;
            details.validate()?;

            let mut next = state.clone();
            next.event_details = details.clone();
            let ticket = next.begin_request(RequestKind::DraftQuestionnaire);
            Ok(Transition::with_effect(
                next,
                Effect::DraftQuestionnaire { ticket, details },
            ))
        }

        WizardEvent::QuestionnaireDrafted { ticket, questions } => {
            complete(state, ticket, |next| {
                next.finish_request();
                next.questions = questions;
                next.step = next.step.transition_to(WizardStep::Questionnaire)?;
                Ok(())
            })
        }

        WizardEvent::QuestionnaireFailed { ticket, message } => {
            complete(state, ticket, |next| {
                next.fail_request(message);
                Ok(())
            })
        }

        WizardEvent::ConfirmQuestionnaire => {
            expect_idle(state, WizardStep::Questionnaire, "confirm the questionnaire")?;
            let mut next = state.clone();
            next.step = next.step.transition_to(WizardStep::Collection)?;
            Ok(Transition::applied(next))
        }

        WizardEvent::GenerateMocks { count } => {
            expect_idle(state, WizardStep::Collection, "generate participants")?;
            if count == 0 {
                return Err(ValidationError::out_of_range("count", 1, i64::MAX, 0).into());
            }

            let mut next = state.clone();
            let ticket = next.begin_request(RequestKind::SynthesizeParticipants);
            let effect = Effect::SynthesizeParticipants {
                ticket,
                count,
                questions: next.questions.clone(),
                details: next.event_details.clone(),
            };
            Ok(Transition::with_effect(next, effect))
        }

        WizardEvent::ParticipantsSynthesized {
            ticket,
            participants,
        } => complete(state, ticket, |next| {
            next.finish_request();
            next.participants.extend(participants);
            Ok(())
        }),

        WizardEvent::ParticipantsFailed { ticket, message } => {
            complete(state, ticket, |next| {
                next.fail_request(message);
                Ok(())
            })
        }

        WizardEvent::Analyze => {
            expect_idle(state, WizardStep::Collection, "form groups")?;
            if state.participants.is_empty() {
                return Err(ValidationError::empty_field("participants").into());
            }

            let mut next = state.clone();
            next.step = next.step.transition_to(WizardStep::Grouping)?;
            let ticket = next.begin_request(RequestKind::ComputeGroupings);
            let effect = Effect::ComputeGroupings {
                ticket,
                details: next.event_details.clone(),
                questions: next.questions.clone(),
                participants: next.participants.clone(),
            };
            Ok(Transition::with_effect(next, effect))
        }

        WizardEvent::GroupsComputed { ticket, groups } => complete(state, ticket, |next| {
            next.finish_request();
            next.groups = groups;
            next.step = next.step.transition_to(WizardStep::Results)?;
            Ok(())
        }),

        // Grouping failures send the user back to the screen that can retry.
        WizardEvent::GroupingFailed { ticket, message } => complete(state, ticket, |next| {
            next.fail_request(message);
            next.step = next.step.transition_to(WizardStep::Collection)?;
            Ok(())
        }),

        WizardEvent::DismissError => {
            let mut next = state.clone();
            next.error = None;
            Ok(Transition::applied(next))
        }

        WizardEvent::Reset { confirmed: false } => Ok(Transition::unchanged(state, Outcome::Ignored)),

        WizardEvent::Reset { confirmed: true } => Ok(Transition::applied(state.reset())),
    }
}

fn expect_idle(
    state: &WizardState,
    step: WizardStep,
    action: &'static str,
) -> Result<(), WizardError> {
    if state.is_loading {
        return Err(WizardError::Busy);
    }
    if state.step != step {
        return Err(WizardError::invalid_transition(state.step, action));
    }
    Ok(())
}

fn complete<F>(state: &WizardState, ticket: RequestTicket, commit: F) -> Result<Transition, WizardError>
where
    F: FnOnce(&mut WizardState) -> Result<(), ValidationError>,
{
    if !state.is_pending(ticket) {
        return Ok(Transition::unchanged(state, Outcome::Stale));
    }
    let mut next = state.clone();
    commit(&mut next)?;
    Ok(Transition::applied(next))
}
