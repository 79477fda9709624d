//! ComplySummarize — compliance document analysis server.

use std::path::PathBuf;
use std::sync::Arc;

use complysum_runtime::Analyzer;
use complysum_summarize::RemoteSummarizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("COMPLYSUM_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    // Initialize configuration
    let config = complysum_core::Config::from_env(&data_dir)?;
    let port = config.port;

    // Remote summarizer with local fallback handled by the orchestrator
    let summarizer = Arc::new(RemoteSummarizer::new(
        config.summarization_url.clone(),
        config.api_key.clone(),
    )?);
    let analyzer = Analyzer::new(summarizer);

    // Build application state and router
    let state = Arc::new(AppState::new(config, analyzer));
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("ComplySummarize server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
