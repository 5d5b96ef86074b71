//! WizardController - runs wizard events and the gateway calls they request.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::foundation::{ValidationError, WizardSessionId};
use crate::domain::wizard::{Effect, Outcome, Transition, WizardError, WizardEvent, WizardState};
use crate::ports::{SessionStore, TeamGateway};

const DEFAULT_MAX_MOCK_BATCH: usize = 50;

/// Owns every wizard session and executes reducer effects.
///
/// Cheap to clone; clones share the same store and gateway.
#[derive(Clone)]
pub struct WizardController {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn TeamGateway>,
    max_mock_batch: usize,
}

impl WizardController {
    pub fn new(store: Arc<dyn SessionStore>, gateway: Arc<dyn TeamGateway>) -> Self {
        Self {
            store,
            gateway,
            max_mock_batch: DEFAULT_MAX_MOCK_BATCH,
        }
    }

    /// Caps the number of mock participants one request may ask for.
    pub fn with_max_mock_batch(mut self, max_mock_batch: usize) -> Self {
        self.max_mock_batch = max_mock_batch;
        self
    }

    pub fn max_mock_batch(&self) -> usize {
        self.max_mock_batch
    }

    pub async fn start_session(&self) -> WizardSessionId {
        let id = self.store.create().await;
        tracing::info!(session_id = %id, "Wizard session started");
        id
    }

    pub async fn snapshot(&self, id: WizardSessionId) -> Result<WizardState, WizardError> {
        self.store.snapshot(id).await
    }

    /// Drops sessions idle for at least `max_idle`. Returns how many went.
    pub async fn evict_idle_sessions(&self, max_idle: Duration) -> usize {
        let evicted = self.store.evict_idle(max_idle).await;
        for id in &evicted {
            tracing::info!(session_id = %id, "Idle wizard session evicted");
        }
        evicted.len()
    }

    /// Sweeps idle sessions every `every` until the returned task is aborted.
    pub fn spawn_session_sweeper(&self, every: Duration, max_idle: Duration) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = controller.evict_idle_sessions(max_idle).await;
                if evicted > 0 {
                    let remaining = controller.store.len().await;
                    tracing::debug!(
                        evicted,
                        remaining,
                        "Session sweep finished"
                    );
                }
            }
        })
    }

    /// Applies a user intent. Any gateway call it requests runs in a
    /// background task and reports back through the store.
    pub async fn dispatch(
        &self,
        id: WizardSessionId,
        event: WizardEvent,
    ) -> Result<Transition, WizardError> {
        let transition = self.apply_intent(id, event).await?;
        if let Some(effect) = transition.effect.clone() {
            self.spawn_effect(id, effect);
        }
        Ok(transition)
    }

    /// Applies a user intent and waits for any gateway call it requests.
    pub async fn handle(
        &self,
        id: WizardSessionId,
        event: WizardEvent,
    ) -> Result<WizardState, WizardError> {
        let transition = self.apply_intent(id, event).await?;
        match transition.effect {
            Some(effect) => self.execute(id, effect).await,
            None => Ok(transition.state),
        }
    }

    /// Runs `effect` against the gateway and applies the completion.
    pub async fn execute(
        &self,
        id: WizardSessionId,
        effect: Effect,
    ) -> Result<WizardState, WizardError> {
        let ticket = effect.ticket();
        let completion = self.run_effect(effect).await;
        let name = completion.name();

        let transition = self.store.update(id, completion).await?;
        match transition.outcome {
            Outcome::Stale => tracing::warn!(
                session_id = %id,
                ticket = ticket.value(),
                event = name,
                "Discarded stale completion"
            ),
            _ => tracing::info!(
                session_id = %id,
                event = name,
                step = %transition.state.step(),
                "Completion applied"
            ),
        }
        Ok(transition.state)
    }

    async fn apply_intent(
        &self,
        id: WizardSessionId,
        event: WizardEvent,
    ) -> Result<Transition, WizardError> {
        if let WizardEvent::GenerateMocks { count } = event {
            if count > self.max_mock_batch {
                return Err(ValidationError::out_of_range(
                    "count",
                    1,
                    self.max_mock_batch as i64,
                    count as i64,
                )
                .into());
            }
        }

        let name = event.name();
        let transition = self.store.update(id, event).await.map_err(|err| {
            tracing::debug!(session_id = %id, event = name, error = %err, "Event rejected");
            err
        })?;

        match transition.outcome {
            Outcome::Ignored => {
                tracing::debug!(session_id = %id, event = name, "Event ignored")
            }
            _ => tracing::info!(
                session_id = %id,
                event = name,
                step = %transition.state.step(),
                "Event applied"
            ),
        }
        Ok(transition)
    }

    fn spawn_effect(&self, id: WizardSessionId, effect: Effect) {
        let controller = self.clone();
        tokio::spawn(async move {
            if let Err(err) = controller.execute(id, effect).await {
                tracing::warn!(session_id = %id, error = %err, "Completion could not be applied");
            }
        });
    }

    /// Calls the gateway and turns the result into a completion event.
    async fn run_effect(&self, effect: Effect) -> WizardEvent {
        match effect {
            Effect::DraftQuestionnaire { ticket, details } => {
                match self.gateway.draft_questionnaire(&details).await {
                    Ok(questions) => WizardEvent::QuestionnaireDrafted { ticket, questions },
                    Err(err) => WizardEvent::QuestionnaireFailed {
                        ticket,
                        message: err.user_message(),
                    },
                }
            }
            Effect::SynthesizeParticipants {
                ticket,
                count,
                questions,
                details,
            } => match self
                .gateway
                .synthesize_participants(count, &questions, &details)
                .await
            {
                Ok(participants) => WizardEvent::ParticipantsSynthesized {
                    ticket,
                    participants,
                },
                Err(err) => WizardEvent::ParticipantsFailed {
                    ticket,
                    message: err.user_message(),
                },
            },
            Effect::ComputeGroupings {
                ticket,
                details,
                questions,
                participants,
            } => match self
                .gateway
                .compute_groupings(&details, &questions, &participants)
                .await
            {
                Ok(groups) => WizardEvent::GroupsComputed { ticket, groups },
                Err(err) => WizardEvent::GroupingFailed {
                    ticket,
                    message: err.user_message(),
                },
            },
        }
    }
}
