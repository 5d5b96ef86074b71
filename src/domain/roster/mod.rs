//! Roster module - locally synthesized participants.

mod sampler;

pub use sampler::{
    participant_name, sample_answer, synthesize_participants, GENERIC_TEXT_ANSWERS, NAME_POOL,
    PARTICIPANT_ID_PREFIX,
};
