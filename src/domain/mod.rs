//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, id stamping, errors, state machine trait)
//! - `event` - Event details, questions, participants and groups
//! - `roster` - Local mock-participant synthesis
//! - `wizard` - Wizard state, events and the pure transition reducer

pub mod event;
pub mod foundation;
pub mod roster;
pub mod wizard;
