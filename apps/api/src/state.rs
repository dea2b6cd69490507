use std::sync::Arc;

use crate::analysis::match_score::MatchScorer;
use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::resume_store::ResumeStore;
use crate::scrape::JobScraper;
use crate::search::SearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: GroqClient,
    /// Uploaded resumes live in memory for the process lifetime.
    pub resumes: ResumeStore,
    pub scraper: JobScraper,
    pub search: SearchClient,
    /// Pluggable match scorer. Default: LlmMatchScorer. Swap via MATCH_SCORER env.
    pub match_scorer: Arc<dyn MatchScorer>,
}
