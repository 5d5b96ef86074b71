//! Proposed teams and the integrity rules a proposal must satisfy.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::Participant;

/// Lowest acceptable compatibility score.
pub const MIN_COMPATIBILITY_SCORE: f64 = 0.0;
/// Highest acceptable compatibility score.
pub const MAX_COMPATIBILITY_SCORE: f64 = 100.0;

/// A participant's seat in a group, as assigned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    /// Expected to match a `Participant::id`.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
}

impl GroupMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
            strengths: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strengths = Some(strengths.into_iter().map(Into::into).collect());
        self
    }

    /// Strengths shown next to the member, at most `limit`.
    pub fn top_strengths(&self, limit: usize) -> &[String] {
        match self.strengths.as_deref() {
            Some(all) => &all[..all.len().min(limit)],
            None => &[],
        }
    }
}

/// One proposed team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<GroupMember>,
    pub justification: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    pub compatibility_score: f64,
}

impl Group {
    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }
}

/// Ways a proposed grouping can contradict the known roster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    #[error("group '{group}' contains unknown participant '{member_id}'")]
    UnknownMember { group: String, member_id: String },

    #[error("participant '{member_id}' is assigned more than once")]
    DuplicateMember { member_id: String },

    #[error("{} participant(s) left unassigned: {}", .missing.len(), .missing.join(", "))]
    Unassigned { missing: Vec<String> },

    #[error("group '{group}' has compatibility score {score} outside 0-100")]
    ScoreOutOfRange { group: String, score: f64 },
}

/// Checks that `groups` assign every participant exactly once, reference no
/// one else, and carry scores in range.
pub fn validate_assignment(
    groups: &[Group],
    participants: &[Participant],
) -> Result<(), AssignmentError> {
    let known: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(known.len());

    for group in groups {
        let score = group.compatibility_score;
        if !(MIN_COMPATIBILITY_SCORE..=MAX_COMPATIBILITY_SCORE).contains(&score) {
            return Err(AssignmentError::ScoreOutOfRange {
                group: group.name.clone(),
                score,
            });
        }

        for member_id in group.member_ids() {
            if !known.contains(member_id) {
                return Err(AssignmentError::UnknownMember {
                    group: group.name.clone(),
                    member_id: member_id.to_string(),
                });
            }
            if !seen.insert(member_id) {
                return Err(AssignmentError::DuplicateMember {
                    member_id: member_id.to_string(),
                });
            }
        }
    }

    let missing: Vec<String> = participants
        .iter()
        .filter(|p| !seen.contains(p.id.as_str()))
        .map(|p| p.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(AssignmentError::Unassigned { missing });
    }

    Ok(())
}
