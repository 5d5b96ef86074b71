//! Session Store Port - where wizard sessions live between requests.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{Transition, WizardError, WizardEvent, WizardState};

/// Port for holding wizard sessions.
///
/// `update` runs the reducer under the store's lock so concurrent events
/// for one session are applied one at a time.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens a fresh session in the initial state.
    async fn create(&self) -> WizardSessionId;

    /// Copy of the session's current state.
    ///
    /// # Errors
    /// Returns `WizardError::SessionNotFound` if no session exists
    async fn snapshot(&self, id: WizardSessionId) -> Result<WizardState, WizardError>;

    /// Applies `event` and stores the resulting state.
    ///
    /// A rejected event leaves the stored state untouched.
    async fn update(
        &self,
        id: WizardSessionId,
        event: WizardEvent,
    ) -> Result<Transition, WizardError>;

    /// Drops every session not created, read or updated within `max_idle`
    /// and returns their ids.
    async fn evict_idle(&self, max_idle: Duration) -> Vec<WizardSessionId>;

    /// Number of live sessions.
    async fn len(&self) -> usize;
}
