//! Identifier value objects.
//!
//! Wizard sessions are addressed by UUID. Items created during a session
//! (questions, participants, groups) carry string ids of the form
//! `<prefix>-<index>-<timestamp>`, stamped locally because the model does not
//! return stable identifiers for new entities.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Unique identifier for one wizard session (one browser tab's flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardSessionId(Uuid);

impl WizardSessionId {
    /// Creates a new random WizardSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WizardSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WizardSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WizardSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Last batch timestamp handed out, in epoch milliseconds.
static LAST_BATCH_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Timestamp shared by every item stamped in one batch.
///
/// Batches are strictly increasing within the process, so two batches
/// created in the same millisecond still produce distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchStamp(i64);

impl BatchStamp {
    /// Allocates the next batch timestamp.
    pub fn next() -> Self {
        let now = Utc::now().timestamp_millis();
        let previous = LAST_BATCH_MILLIS
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        Self(now.max(previous + 1))
    }

    /// Creates a stamp with a fixed value (tests and replays).
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the stamp in epoch milliseconds.
    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Builds the id of the `index`-th item in this batch.
    pub fn item_id(&self, prefix: &str, index: usize) -> String {
        format!("{}-{}-{}", prefix, index, self.0)
    }
}
