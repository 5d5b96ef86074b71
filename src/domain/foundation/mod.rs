//! Foundation module - Shared domain primitives.
//!
//! Identifiers, id stamping, validation errors and the state machine trait
//! that the rest of the TeamCraft domain is built on.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{BatchStamp, WizardSessionId};
pub use state_machine::StateMachine;
