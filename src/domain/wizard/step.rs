//! Wizard steps and the progress track shown above every screen.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Screen the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Setup,
    Questionnaire,
    Collection,
    /// Transient: the grouping call is in flight.
    Grouping,
    Results,
}

impl WizardStep {
    /// Every step in forward order.
    pub const ORDER: [WizardStep; 5] = [
        WizardStep::Setup,
        WizardStep::Questionnaire,
        WizardStep::Collection,
        WizardStep::Grouping,
        WizardStep::Results,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Setup => "setup",
            WizardStep::Questionnaire => "questionnaire",
            WizardStep::Collection => "collection",
            WizardStep::Grouping => "grouping",
            WizardStep::Results => "results",
        }
    }

    /// Position on the four-slot progress track. `Grouping` shares the
    /// `Results` slot so the track has no in-flight position.
    pub fn progress_position(&self) -> usize {
        match self {
            WizardStep::Setup => 0,
            WizardStep::Questionnaire => 1,
            WizardStep::Collection => 2,
            WizardStep::Grouping | WizardStep::Results => 3,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        // Reset is always allowed.
        *target == Setup
            || matches!(
                (self, target),
                (Setup, Questionnaire)
                    | (Questionnaire, Collection)
                    | (Collection, Grouping)
                    | (Grouping, Results)
                    | (Grouping, Collection)
            )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Setup => vec![Setup, Questionnaire],
            Questionnaire => vec![Setup, Collection],
            Collection => vec![Setup, Grouping],
            Grouping => vec![Setup, Results, Collection],
            Results => vec![Setup],
        }
    }
}

/// Labels of the progress track slots.
pub const PROGRESS_TRACK: [&str; 4] = ["Setup", "Review", "Collect", "Groups"];

/// How a progress slot is drawn relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Completed,
    Current,
    Upcoming,
}

impl ProgressStatus {
    /// Status of slot `position` while the wizard is on `current`.
    pub fn of(position: usize, current: WizardStep) -> Self {
        let current = current.progress_position();
        match position.cmp(&current) {
            std::cmp::Ordering::Less => ProgressStatus::Completed,
            std::cmp::Ordering::Equal => ProgressStatus::Current,
            std::cmp::Ordering::Greater => ProgressStatus::Upcoming,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Completed => "completed",
            ProgressStatus::Current => "current",
            ProgressStatus::Upcoming => "upcoming",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_path_is_valid() {
        let mut step = WizardStep::Setup;
        for next in [
            WizardStep::Questionnaire,
            WizardStep::Collection,
            WizardStep::Grouping,
            WizardStep::Results,
        ] {
            step = step.transition_to(next).unwrap();
        }
        assert_eq!(step, WizardStep::Results);
    }

    #[test]
    fn grouping_can_roll_back_to_collection_only() {
        assert!(WizardStep::Grouping.can_transition_to(&WizardStep::Collection));
        assert!(!WizardStep::Results.can_transition_to(&WizardStep::Collection));
        assert!(!WizardStep::Questionnaire.can_transition_to(&WizardStep::Grouping));
    }

    #[test]
    fn every_step_can_reset() {
        for step in WizardStep::ORDER {
            assert!(step.can_transition_to(&WizardStep::Setup));
            assert!(!step.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_agrees_with_valid_transitions() {
        for from in WizardStep::ORDER {
            for to in WizardStep::ORDER {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn grouping_is_drawn_as_results() {
        assert_eq!(
            WizardStep::Grouping.progress_position(),
            WizardStep::Results.progress_position()
        );
        assert_eq!(ProgressStatus::of(3, WizardStep::Grouping), ProgressStatus::Current);
        assert_eq!(ProgressStatus::of(2, WizardStep::Grouping), ProgressStatus::Completed);
    }

    #[test]
    fn progress_status_on_collection() {
        let statuses: Vec<ProgressStatus> = (0..PROGRESS_TRACK.len())
            .map(|i| ProgressStatus::of(i, WizardStep::Collection))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ProgressStatus::Completed,
                ProgressStatus::Completed,
                ProgressStatus::Current,
                ProgressStatus::Upcoming
            ]
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WizardStep::Grouping).unwrap(), "\"grouping\"");
    }
}
