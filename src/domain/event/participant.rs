//! Participants and their questionnaire answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Someone who answered (or was simulated answering) the questionnaire.
///
/// `answers` is keyed by `Question::id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            answers: BTreeMap::new(),
        }
    }

    pub fn with_answer(mut self, question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question_id.into(), answer.into());
        self
    }

    /// First character of the name, for roster avatars.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
