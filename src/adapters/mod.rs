//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini provider, mock provider and the LLM-backed team gateway
//! - `http` - Server-rendered wizard screens and session routes
//! - `storage` - In-memory wizard session store

pub mod ai;
pub mod http;
pub mod storage;

pub use ai::{GeminiProvider, LlmTeamGateway, MockAIProvider};
pub use http::{app_router, WizardHandlers};
pub use storage::InMemorySessionStore;
