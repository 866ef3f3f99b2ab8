//! Survivor Engine - Main entry point.
//!
//! Live events arrive as JSON lines on stdin; the overlay files are written
//! to `OVERLAY_DIR`.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use survivor_engine::infrastructure::{
    app_config::{AppConfig, NarrationProvider},
    event_feed,
    gemini::GeminiClient,
    ollama::OllamaClient,
    ports::LlmPort,
    state_files::FileStateSink,
};
use survivor_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survivor_engine=debug,survivor_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Survivor Engine");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let services = &config.services;
    let timeout_secs = config.game.narration_timeout.as_secs();

    let ollama: Arc<dyn LlmPort> = Arc::new(OllamaClient::with_timeout(
        &services.ollama_base_url,
        &services.ollama_model,
        timeout_secs,
    ));
    let narrator: Arc<dyn LlmPort> = match services.narration_provider {
        NarrationProvider::Gemini => {
            let api_key = services
                .gemini_api_key
                .as_deref()
                .context("GEMINI_API_KEY is required for Gemini narration")?;
            tracing::info!(model = %services.gemini_model, "Narration via Gemini");
            Arc::new(GeminiClient::new(
                &services.gemini_base_url,
                &services.gemini_model,
                api_key,
                timeout_secs,
            ))
        }
        NarrationProvider::Ollama => {
            tracing::info!(model = %services.ollama_model, "Narration via Ollama");
            ollama.clone()
        }
    };

    let sink = FileStateSink::new(&services.overlay_dir);
    sink.ensure_dir()
        .await
        .with_context(|| format!("Cannot create overlay dir {}", sink.dir().display()))?;
    tracing::info!(
        overlay_dir = %sink.dir().display(),
        channel = %services.live_channel,
        "Overlay files ready"
    );

    let app = App::start(config.game.clone(), narrator, ollama, Arc::new(sink)).await;

    // Spawn live event feed
    let feed_engine = app.engine().clone();
    let feed_cancel = app.shutdown_token();
    let feed = tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        match event_feed::run_json_lines(stdin, feed_engine.as_ref(), feed_cancel).await {
            Ok(count) => tracing::info!(events = count, "Live event feed finished"),
            Err(e) => tracing::error!(error = %e, "Live event feed failed"),
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    app.shutdown().await;
    if let Err(e) = feed.await {
        tracing::warn!(error = %e, "Live event feed task panicked");
    }

    tracing::info!("Survivor Engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
