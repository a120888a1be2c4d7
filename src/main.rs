use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use ghana_names::application::services::{NameCatalog, NameGenerationService, TranscriptionService};
use ghana_names::infrastructure::audio::TranscriptionEngineFactory;
use ghana_names::infrastructure::catalog::GHANAIAN_NAMES;
use ghana_names::infrastructure::llm::create_llm_client;
use ghana_names::infrastructure::observability::{TracingConfig, init_tracing};
use ghana_names::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        addr,
    );

    let name_generation_service = Arc::new(NameGenerationService::new(
        create_llm_client(&settings.llm).map(Arc::new),
    ));
    let transcription_service = Arc::new(TranscriptionService::new(
        TranscriptionEngineFactory::create(&settings.transcription),
    ));

    let state = AppState {
        name_generation_service,
        transcription_service,
        name_catalog: NameCatalog::new(GHANAIAN_NAMES),
        max_upload_bytes: settings.transcription.max_upload_bytes(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
