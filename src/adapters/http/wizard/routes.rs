//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze, confirm_questionnaire, dismiss_error, generate_participants, health, reset_session,
    session_state, show_session, start_session, submit_setup, WizardHandlers,
};

/// Creates the wizard router with all endpoints.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", get(start_session))
        .route("/health", get(health))
        .route("/sessions/:id", get(show_session))
        .route("/sessions/:id/state", get(session_state))
        .route("/sessions/:id/setup", post(submit_setup))
        .route("/sessions/:id/questionnaire/confirm", post(confirm_questionnaire))
        .route("/sessions/:id/participants/mock", post(generate_participants))
        .route("/sessions/:id/analyze", post(analyze))
        .route("/sessions/:id/error/dismiss", post(dismiss_error))
        .route("/sessions/:id/reset", post(reset_session))
        .with_state(handlers)
}
