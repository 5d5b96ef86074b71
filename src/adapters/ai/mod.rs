//! AI Adapters.
//!
//! Implementations of the AIProvider and TeamGateway ports.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `GeminiProvider` - Google Gemini models via the REST API
//! - `LlmTeamGateway` - Prompts, schemas and reply parsing for the wizard

mod gemini_provider;
mod mock_provider;
mod prompts;
mod schemas;
mod team_gateway;

pub use gemini_provider::{ApiKeySource, GeminiConfig, GeminiProvider, API_KEY_ENV_VARS};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use prompts::{INSTRUCTIONS_HEADING, PARTICIPANTS_HEADING};
pub use team_gateway::{LlmTeamGateway, GROUPING_FAILURE, QUESTIONNAIRE_FAILURE};
