//! HTTP handlers for wizard endpoints.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::screens::{error_page, render_screen, ScreenContext};
use crate::application::WizardController;
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{WizardError, WizardEvent};

use super::dto::{MockParticipantsForm, ResetForm, SetupForm, WizardStateResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    controller: WizardController,
    model_label: String,
    poll_interval_secs: u64,
}

impl WizardHandlers {
    pub fn new(
        controller: WizardController,
        model_label: impl Into<String>,
        poll_interval_secs: u64,
    ) -> Self {
        Self {
            controller,
            model_label: model_label.into(),
            poll_interval_secs,
        }
    }

    fn screen_context(&self, session_id: WizardSessionId) -> ScreenContext {
        ScreenContext::new(session_id, self.model_label.clone(), self.poll_interval_secs)
    }

    /// Dispatches `event` and sends the browser back to the session page.
    async fn submit(&self, session_id: WizardSessionId, event: WizardEvent) -> Response {
        match self.controller.dispatch(session_id, event).await {
            Ok(_) => session_redirect(session_id),
            Err(e) => handle_wizard_error(e),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Open a new wizard session
pub async fn start_session(State(handlers): State<WizardHandlers>) -> Response {
    let session_id = handlers.controller.start_session().await;
    session_redirect(session_id)
}

/// GET /sessions/:id - Render the current screen
pub async fn show_session(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.controller.snapshot(session_id).await {
        Ok(state) => {
            let ctx = handlers.screen_context(session_id);
            Html(render_screen(&ctx, &state)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /sessions/:id/state - JSON snapshot for polling clients
pub async fn session_state(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.controller.snapshot(session_id).await {
        Ok(state) => {
            let response: WizardStateResponse = state.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// POST /sessions/:id/setup - Submit event details and draft a questionnaire
pub async fn submit_setup(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    form: Result<Form<SetupForm>, FormRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return handle_form_rejection(rejection),
    };

    handlers
        .submit(session_id, WizardEvent::SubmitDetails(form.into()))
        .await
}

/// POST /sessions/:id/questionnaire/confirm - Approve the questionnaire
pub async fn confirm_questionnaire(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    match parse_session_id(&session_id) {
        Ok(id) => handlers.submit(id, WizardEvent::ConfirmQuestionnaire).await,
        Err(response) => response,
    }
}

/// POST /sessions/:id/participants/mock - Synthesize mock participants
pub async fn generate_participants(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    form: Result<Form<MockParticipantsForm>, FormRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return handle_form_rejection(rejection),
    };

    handlers
        .submit(session_id, WizardEvent::GenerateMocks { count: form.count })
        .await
}

/// POST /sessions/:id/analyze - Ask for groupings of the current roster
pub async fn analyze(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    match parse_session_id(&session_id) {
        Ok(id) => handlers.submit(id, WizardEvent::Analyze).await,
        Err(response) => response,
    }
}

/// POST /sessions/:id/error/dismiss - Clear the error banner
pub async fn dismiss_error(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    match parse_session_id(&session_id) {
        Ok(id) => handlers.submit(id, WizardEvent::DismissError).await,
        Err(response) => response,
    }
}

/// POST /sessions/:id/reset - Start over, if confirmed
pub async fn reset_session(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    form: Result<Form<ResetForm>, FormRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    // An unreadable body counts as "not confirmed".
    let confirmed = form.map(|Form(form)| form.is_confirmed()).unwrap_or(false);

    handlers
        .submit(session_id, WizardEvent::Reset { confirmed })
        .await
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<WizardSessionId, Response> {
    raw.parse::<WizardSessionId>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Html(error_page("Session Not Found", "Invalid session ID")),
        )
            .into_response()
    })
}

fn session_redirect(session_id: WizardSessionId) -> Response {
    Redirect::to(&format!("/sessions/{}", session_id)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_wizard_error(error: WizardError) -> Response {
    let message = error.to_string();
    match error {
        WizardError::SessionNotFound(_) => (
            StatusCode::NOT_FOUND,
            Html(error_page("Session Not Found", &message)),
        )
            .into_response(),
        WizardError::InvalidTransition { .. } => (
            StatusCode::CONFLICT,
            Html(error_page("Action Not Available", &message)),
        )
            .into_response(),
        WizardError::Busy => (
            StatusCode::CONFLICT,
            Html(error_page("Still Working", &message)),
        )
            .into_response(),
        WizardError::Validation(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(error_page("Invalid Input", &message)),
        )
            .into_response(),
    }
}

fn handle_form_rejection(rejection: FormRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(error_page("Invalid Input", &rejection.body_text())),
    )
        .into_response()
}
