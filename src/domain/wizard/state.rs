//! The single mutable record of one wizard session.

use serde::Serialize;

use super::WizardStep;
use crate::domain::event::{EventDetails, Group, Participant, Question};

/// Handle for one dispatched gateway call.
///
/// A completion is committed only while its ticket is still the pending
/// one; reset or a newer dispatch makes older tickets stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Which gateway operation a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    DraftQuestionnaire,
    SynthesizeParticipants,
    ComputeGroupings,
}

/// The in-flight request, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub kind: RequestKind,
}

/// Wizard session state. Only the reducer in `transitions` mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub(super) step: WizardStep,
    pub(super) event_details: EventDetails,
    pub(super) questions: Vec<Question>,
    pub(super) participants: Vec<Participant>,
    pub(super) groups: Vec<Group>,
    pub(super) is_loading: bool,
    pub(super) error: Option<String>,
    pub(super) pending: Option<PendingRequest>,
    #[serde(skip)]
    pub(super) tickets_issued: u64,
}

impl WizardState {
    /// State of a freshly opened wizard.
    pub fn initial() -> Self {
        Self {
            step: WizardStep::Setup,
            event_details: EventDetails::default(),
            questions: Vec::new(),
            participants: Vec::new(),
            groups: Vec::new(),
            is_loading: false,
            error: None,
            pending: None,
            tickets_issued: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn event_details(&self) -> &EventDetails {
        &self.event_details
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    /// True when the user-visible shape equals `initial()`.
    pub fn is_pristine(&self) -> bool {
        self.step == WizardStep::Setup
            && self.event_details.is_blank()
            && self.questions.is_empty()
            && self.participants.is_empty()
            && self.groups.is_empty()
            && !self.is_loading
            && self.error.is_none()
            && self.pending.is_none()
    }

    pub(super) fn is_pending(&self, ticket: RequestTicket) -> bool {
        self.pending.is_some_and(|p| p.ticket == ticket)
    }

    /// Marks a request in flight and returns its ticket.
    pub(super) fn begin_request(&mut self, kind: RequestKind) -> RequestTicket {
        self.tickets_issued += 1;
        let ticket = RequestTicket(self.tickets_issued);
        self.pending = Some(PendingRequest { ticket, kind });
        self.is_loading = true;
        self.error = None;
        ticket
    }

    pub(super) fn finish_request(&mut self) {
        self.pending = None;
        self.is_loading = false;
    }

    pub(super) fn fail_request(&mut self, message: String) {
        self.finish_request();
        self.error = Some(message);
    }

    /// Back to `initial()`, keeping the ticket counter so tickets issued
    /// before the reset can never match again.
    pub(super) fn reset(&self) -> Self {
        Self {
            tickets_issued: self.tickets_issued,
            ..Self::initial()
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}
