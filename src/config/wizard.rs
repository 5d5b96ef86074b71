//! Wizard behavior configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Wizard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Artificial delay before mock participants appear, in milliseconds
    #[serde(default = "default_mock_delay")]
    pub mock_delay_ms: u64,

    /// Largest mock batch accepted in one request
    #[serde(default = "default_max_mock_batch")]
    pub max_mock_batch: usize,

    /// Page auto-refresh interval while a request is in flight
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Sessions untouched for this long are dropped
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// How often idle sessions are swept
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl WizardConfig {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_mock_batch == 0 {
            return Err(ValidationError::InvalidBatchLimit);
        }
        if self.poll_interval_secs == 0 || self.poll_interval_secs > 60 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.session_ttl_secs == 0 || self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: default_mock_delay(),
            max_mock_batch: default_max_mock_batch(),
            poll_interval_secs: default_poll_interval(),
            session_ttl_secs: default_session_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_mock_delay() -> u64 {
    600
}

fn default_max_mock_batch() -> usize {
    50
}

fn default_poll_interval() -> u64 {
    2
}

fn default_session_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    60
}
