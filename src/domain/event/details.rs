//! Organizer-entered event description.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// What the organizer tells us about the event.
///
/// Every field is free text handed to the model verbatim; the only local
/// rule is that none of them may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub event_name: String,
    pub context: String,
    pub group_size: String,
    pub matching_rules: String,
    pub mandatory_topics: String,
    pub matching_philosophy: String,
}

impl EventDetails {
    /// The sample event the setup form is prefilled with.
    pub fn demo() -> Self {
        Self {
            event_name: "AI Hackathon 2024".to_string(),
            context: "A 48-hour hackathon focused on building generative AI apps. \
                      Participants range from students to senior engineers."
                .to_string(),
            group_size: "3-4 people".to_string(),
            matching_rules: "Mix technical and non-technical skills. \
                             Ensure at least one senior developer per team."
                .to_string(),
            mandatory_topics: "Coding experience (Python/JS), Design skills, \
                               Project Management interest, Time zone."
                .to_string(),
            matching_philosophy: "Balanced teams with diverse skill sets to ensure \
                                  every team can ship a product."
                .to_string(),
        }
    }

    /// Fields paired with their wire names, in form order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("eventName", &self.event_name),
            ("groupSize", &self.group_size),
            ("context", &self.context),
            ("matchingRules", &self.matching_rules),
            ("matchingPhilosophy", &self.matching_philosophy),
            ("mandatoryTopics", &self.mandatory_topics),
        ]
    }

    /// Rejects the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.fields().iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ValidationError::empty_field(*name)),
            None => Ok(()),
        }
    }

    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_details_are_valid() {
        assert!(EventDetails::demo().validate().is_ok());
    }

    #[test]
    fn blank_field_is_rejected_by_name() {
        let details = EventDetails {
            group_size: "   ".to_string(),
            ..EventDetails::demo()
        };
        assert_eq!(
            details.validate(),
            Err(ValidationError::empty_field("groupSize"))
        );
    }

    #[test]
    fn default_details_are_blank_and_invalid() {
        let details = EventDetails::default();
        assert!(details.is_blank());
        assert_eq!(
            details.validate(),
            Err(ValidationError::empty_field("eventName"))
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(EventDetails::demo()).unwrap();
        assert_eq!(json["eventName"], "AI Hackathon 2024");
        assert!(json.get("matchingPhilosophy").is_some());
        assert!(json.get("event_name").is_none());
    }
}
