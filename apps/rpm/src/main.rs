mod cli;
mod config;
mod errors;
mod export;
mod generation;
mod lesson;
mod llm_client;
mod render;
mod routes;
mod session;
mod state;
mod theme;

#[cfg(test)]
mod test_helpers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::export::{SystemClipboard, SystemEditorLauncher};
use crate::generation::generator::{ContentGenerator, GeminiGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stderr keeps stdout free for `rpm generate`
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Initialize LLM client
    let mut llm = LlmClient::new(config.gemini_api_key.clone());
    if let Some(base) = &config.gemini_api_base {
        llm = llm.with_api_base(base.clone());
    }
    if !llm.has_api_key() {
        warn!("GEMINI_API_KEY is not set; generation will fail until it is configured");
    }
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let generator: Arc<dyn ContentGenerator> = Arc::new(GeminiGenerator::new(llm));

    match cli.command {
        Some(Commands::Generate(args)) => {
            cli::run_generate(
                &args,
                &config,
                generator.as_ref(),
                &SystemClipboard::new(),
                &SystemEditorLauncher,
                &mut std::io::stdout(),
            )
            .await?;
        }
        Some(Commands::Serve { port }) => serve(config, generator, port).await?,
        None => serve(config, generator, None).await?,
    }

    Ok(())
}

async fn serve(
    config: Config,
    generator: Arc<dyn ContentGenerator>,
    port: Option<u16>,
) -> Result<()> {
    info!("Starting RPM generator v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState {
        generator,
        sessions: SessionStore::new(config.session_ttl),
        document: config.document_settings(),
        config: config.clone(),
    };
    info!(
        "Documents signed at {} ({}); sessions expire after {} min",
        state.document.signing_place,
        state.document.year,
        config.session_ttl.as_secs() / 60
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the API has non-browser clients

    let addr: SocketAddr = format!("0.0.0.0:{}", port.unwrap_or(config.port)).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
