//! Wizard-specific error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{ValidationError, WizardSessionId};

/// Reasons an intent cannot be applied to a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Wizard session not found: {0}")]
    SessionNotFound(WizardSessionId),

    #[error("Cannot {action} during the {step} step")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },

    #[error("Another request is still in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl WizardError {
    pub fn invalid_transition(step: WizardStep, action: &'static str) -> Self {
        WizardError::InvalidTransition { step, action }
    }
}
