//! HTTP DTOs for wizard endpoints.
//!
//! Form posts accept both the camelCase names the screens use and the
//! snake_case field names.

use serde::{Deserialize, Serialize};

use crate::domain::event::{EventDetails, Group, Participant, Question};
use crate::domain::wizard::{ProgressStatus, WizardState, PROGRESS_TRACK};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Setup form. Missing fields arrive empty and fail validation downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetupForm {
    #[serde(alias = "eventName")]
    pub event_name: String,
    pub context: String,
    #[serde(alias = "groupSize")]
    pub group_size: String,
    #[serde(alias = "matchingRules")]
    pub matching_rules: String,
    #[serde(alias = "mandatoryTopics")]
    pub mandatory_topics: String,
    #[serde(alias = "matchingPhilosophy")]
    pub matching_philosophy: String,
}

impl From<SetupForm> for EventDetails {
    fn from(form: SetupForm) -> Self {
        Self {
            event_name: form.event_name,
            context: form.context,
            group_size: form.group_size,
            matching_rules: form.matching_rules,
            mandatory_topics: form.mandatory_topics,
            matching_philosophy: form.matching_philosophy,
        }
    }
}

/// Mock participant request.
#[derive(Debug, Clone, Deserialize)]
pub struct MockParticipantsForm {
    pub count: usize,
}

/// Reset request; anything but `confirm=yes` leaves the session alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl ResetForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One slot of the progress track.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSlotResponse {
    pub label: &'static str,
    pub status: &'static str,
}

/// JSON snapshot of a wizard session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStateResponse {
    pub step: String,
    pub progress: Vec<ProgressSlotResponse>,
    pub event_details: EventDetails,
    pub questions: Vec<Question>,
    pub participants: Vec<Participant>,
    pub groups: Vec<Group>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl From<WizardState> for WizardStateResponse {
    fn from(state: WizardState) -> Self {
        let progress = PROGRESS_TRACK
            .iter()
            .enumerate()
            .map(|(position, label)| ProgressSlotResponse {
                label: *label,
                status: ProgressStatus::of(position, state.step()).as_str(),
            })
            .collect();

        Self {
            step: state.step().to_string(),
            progress,
            event_details: state.event_details().clone(),
            questions: state.questions().to_vec(),
            participants: state.participants().to_vec(),
            groups: state.groups().to_vec(),
            is_loading: state.is_loading(),
            error: state.error().map(str::to_string),
        }
    }
}
