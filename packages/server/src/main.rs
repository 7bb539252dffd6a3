// Main entry point for the WarcBuddy API server

use std::sync::Arc;

use anyhow::{Context, Result};
use openai_client::OpenAIClient;
use server::app::{build_app, AppState};
use server::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warc_extraction::ai::OpenAISummarizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,warc_extraction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WarcBuddy API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // One collaborator client per process, reused read-only across requests
    let summarizer = OpenAISummarizer::new(OpenAIClient::new(config.openai_api_key.clone()))
        .with_model(config.openai_model.clone());
    let state = AppState {
        summarizer: Arc::new(summarizer),
    };

    // Build application
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
