//! Wiring & DI. Entry point: load config, build adapters, serve the wizard.

use std::sync::Arc;

use anyhow::Context;
use teamcraft::adapters::ai::{GeminiConfig, GeminiProvider, LlmTeamGateway};
use teamcraft::adapters::http::{app_router, WizardHandlers};
use teamcraft::adapters::storage::InMemorySessionStore;
use teamcraft::application::WizardController;
use teamcraft::config::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config);

    let provider = GeminiProvider::new(GeminiConfig::from_settings(&config.ai))
        .map_err(|e| anyhow::anyhow!("Gemini client: {}", e))?;
    let gateway = LlmTeamGateway::new(Arc::new(provider))
        .with_mock_delay(config.wizard.mock_delay());
    let store = InMemorySessionStore::new();
    let controller = WizardController::new(Arc::new(store), Arc::new(gateway))
        .with_max_mock_batch(config.wizard.max_mock_batch);
    controller.spawn_session_sweeper(config.wizard.sweep_interval(), config.wizard.session_ttl());

    let handlers = WizardHandlers::new(
        controller,
        config.ai.model.clone(),
        config.wizard.poll_interval_secs,
    );
    let app = app_router(handlers, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        credential_configured = config.ai.api_key.is_some(),
        "TeamCraft listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.server.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
