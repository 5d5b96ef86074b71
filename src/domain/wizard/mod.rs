//! Wizard module - the organizer's guided flow as a pure state machine.
//!
//! `setup → questionnaire → collection → grouping → results`, with an error
//! slot orthogonal to the step. The reducer in `transitions` never performs
//! I/O; it returns an [`Effect`] describing the gateway call to run and
//! expects the outcome back as another [`WizardEvent`].

mod errors;
mod events;
mod state;
mod step;
mod transitions;

pub use errors::WizardError;
pub use events::{Effect, WizardEvent};
pub use state::{PendingRequest, RequestKind, RequestTicket, WizardState};
pub use step::{ProgressStatus, WizardStep, PROGRESS_TRACK};
pub use transitions::{apply, Outcome, Transition};
