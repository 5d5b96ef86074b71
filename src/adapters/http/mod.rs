//! HTTP adapters - the server-rendered wizard.
//!
//! `screens` turns wizard state into HTML; `wizard` exposes the session
//! routes that drive the controller.

pub mod screens;
pub mod wizard;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use wizard::{wizard_routes, WizardHandlers};

/// Full application router with request tracing and a per-request timeout.
pub fn app_router(handlers: WizardHandlers, request_timeout: Duration) -> Router {
    wizard_routes(handlers)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
