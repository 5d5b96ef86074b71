//! Event module - the value shapes passed between every layer.
//!
//! - `EventDetails` - organizer intent
//! - `Question` / `QuestionType` - the questionnaire
//! - `Participant` - a roster entry and its answers
//! - `Group` / `GroupMember` - a proposed team, plus roster integrity checks

mod details;
mod group;
mod participant;
mod question;

pub use details::EventDetails;
pub use group::{
    validate_assignment, AssignmentError, Group, GroupMember, MAX_COMPATIBILITY_SCORE,
    MIN_COMPATIBILITY_SCORE,
};
pub use participant::Participant;
pub use question::{Question, QuestionType};
