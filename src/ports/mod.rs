//! Ports - interfaces between the domain and the outside world.
//!
//! - `AIProvider` - structured-output LLM completions
//! - `TeamGateway` - questionnaire drafting, participant synthesis, grouping
//! - `SessionStore` - wizard session persistence

mod ai_provider;
mod session_store;
mod team_gateway;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, TokenUsage,
};
pub use session_store::SessionStore;
pub use team_gateway::{GatewayError, TeamGateway};
