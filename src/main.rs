use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use medmentor::application::services::{AdvisorService, PromptAssembler};
use medmentor::infrastructure::llm::OpenAiGateway;
use medmentor::infrastructure::observability::{TracingConfig, init_tracing};
use medmentor::infrastructure::persistence::{PgInteractionStore, create_pool, run_migrations};
use medmentor::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        "medmentor",
    );

    if settings.gateway.api_key.is_empty() {
        tracing::warn!("Gateway API key not configured; advisor requests will fail");
    }

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;

    if settings.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let interaction_store = Arc::new(PgInteractionStore::new(pool));
    let model_gateway = Arc::new(OpenAiGateway::from_settings(&settings.gateway));

    let prompt_assembler = PromptAssembler::new(
        interaction_store,
        settings.prompt.assistant_name.clone(),
        settings.retrieval.match_limit,
    );
    let advisor_service = Arc::new(AdvisorService::new(prompt_assembler, model_gateway));

    let router = create_router(AppState::new(advisor_service));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, model = %settings.gateway.model, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
