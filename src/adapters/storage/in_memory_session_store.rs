//! In-Memory Session Store Adapter
//!
//! Holds wizard sessions in a process-local map. Sessions are lost on restart
//! and dropped by `evict_idle` once they go unused.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{apply, Transition, WizardError, WizardEvent, WizardState};
use crate::ports::SessionStore;

#[derive(Debug)]
struct StoredSession {
    state: WizardState,
    last_touched: Instant,
}

impl StoredSession {
    fn fresh() -> Self {
        Self {
            state: WizardState::initial(),
            last_touched: Instant::now(),
        }
    }
}

/// In-memory storage for wizard sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<WizardSessionId, StoredSession>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> WizardSessionId {
        let id = WizardSessionId::new();
        self.sessions.write().await.insert(id, StoredSession::fresh());
        id
    }

    async fn snapshot(&self, id: WizardSessionId) -> Result<WizardState, WizardError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(WizardError::SessionNotFound(id))?;
        session.last_touched = Instant::now();
        Ok(session.state.clone())
    }

    async fn update(
        &self,
        id: WizardSessionId,
        event: WizardEvent,
    ) -> Result<Transition, WizardError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(WizardError::SessionNotFound(id))?;
        session.last_touched = Instant::now();

        let transition = apply(&session.state, event)?;
        session.state = transition.state.clone();
        Ok(transition)
    }

    async fn evict_idle(&self, max_idle: Duration) -> Vec<WizardSessionId> {
        let mut sessions = self.sessions.write().await;
        let idle: Vec<WizardSessionId> = sessions
            .iter()
            .filter(|(_, session)| session.last_touched.elapsed() >= max_idle)
            .map(|(id, _)| *id)
            .collect();
        for id in &idle {
            sessions.remove(id);
        }
        idle
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
