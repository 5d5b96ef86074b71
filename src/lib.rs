//! TeamCraft - AI-assisted team formation
//!
//! This crate runs a five-step wizard: an organizer describes an event, an
//! LLM drafts a questionnaire, participants are collected (or synthesized),
//! and the LLM proposes groups with a justification for each.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
