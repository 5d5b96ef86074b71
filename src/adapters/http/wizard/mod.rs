//! HTTP adapter for wizard endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{MockParticipantsForm, ResetForm, SetupForm, WizardStateResponse};
pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
