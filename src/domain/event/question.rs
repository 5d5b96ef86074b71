//! Questionnaire items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Open text.
    Text,
    /// Integer scale from 1 to 10.
    Scale,
    /// One of a declared list of options.
    Choice,
    /// Yes / No.
    Boolean,
}

impl QuestionType {
    /// Every variant, in the order the model is offered them.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Text,
        QuestionType::Scale,
        QuestionType::Choice,
        QuestionType::Boolean,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Scale => "scale",
            QuestionType::Choice => "choice",
            QuestionType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single questionnaire question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type,
            options: None,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Options of a choice question, if it declares at least one.
    pub fn choice_options(&self) -> Option<&[String]> {
        match (self.question_type, self.options.as_deref()) {
            (QuestionType::Choice, Some(options)) if !options.is_empty() => Some(options),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&QuestionType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
        for kind in QuestionType::ALL {
            let parsed: QuestionType =
                serde_json::from_str(&format!("\"{}\"", kind.as_str())).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn question_serializes_type_key_and_omits_missing_options() {
        let question = Question::new("q-0-1", "How many years of Rust?", QuestionType::Scale);
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "scale");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn choice_options_requires_choice_type_and_entries() {
        let choice = Question::new("q", "Role?", QuestionType::Choice).with_options(["Dev", "PM"]);
        assert_eq!(choice.choice_options().map(<[String]>::len), Some(2));

        let empty = Question::new("q", "Role?", QuestionType::Choice).with_options(Vec::<String>::new());
        assert!(empty.choice_options().is_none());

        let text = Question::new("q", "Why?", QuestionType::Text).with_options(["ignored"]);
        assert!(text.choice_options().is_none());
    }
}
