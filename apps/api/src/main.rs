mod analysis;
mod config;
mod errors;
mod extract;
mod listings;
mod llm_client;
mod mailer;
mod resume_store;
mod routes;
mod scrape;
mod search;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::match_score::{KeywordMatchScorer, LlmMatchScorer, MatchScorer};
use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::resume_store::ResumeStore;
use crate::routes::build_router;
use crate::scrape::JobScraper;
use crate::search::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GroqClient::new(config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize SerpApi search client (degrades to 503 responses without a key)
    let search = SearchClient::new(config.serpapi_api_key.clone());
    if search.is_configured() {
        info!("SerpApi search client initialized");
    } else {
        info!("SERPAPI_API_KEY not set; /jobs/search will return 503");
    }

    // Initialize match scorer (LlmMatchScorer by default, swap via MATCH_SCORER)
    let match_scorer: Arc<dyn MatchScorer> = if config.match_scorer == "keyword" {
        info!("Using keyword-overlap match scorer");
        Arc::new(KeywordMatchScorer)
    } else {
        Arc::new(LlmMatchScorer::new(llm.clone()))
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        llm,
        resumes: ResumeStore::new(),
        scraper: JobScraper::new(),
        search,
        match_scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
