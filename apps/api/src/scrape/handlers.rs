//! HTTP surface of the scrape pipeline.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::keywords;
use crate::errors::AppError;
use crate::listings::{cleaner, csv_store, JobListing};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub resume_id: Option<Uuid>,
    pub keyword: Option<String>,
    #[serde(default = "default_all_sources")]
    pub all_sources: bool,
}

fn default_all_sources() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub keyword: String,
    pub total: usize,
    pub listings: Vec<JobListing>,
    pub csv_path: Option<String>,
    pub dropped: usize,
    pub enriched: usize,
    pub duplicates_removed: usize,
}

/// POST /api/v1/jobs/scrape
///
/// Scrapes the boards for the given keyword (or one derived from a stored
/// resume), writes the raw CSV, then runs the cleanup pass and writes the
/// cleaned CSV beside it.
pub async fn handle_scrape(
    State(state): State<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let keyword = resolve_keyword(&state, request.resume_id, request.keyword).await?;

    let run = state.scraper.run(&keyword, request.all_sources).await;
    if run.listings.is_empty() {
        return Ok(Json(ScrapeResponse {
            keyword,
            total: 0,
            listings: Vec::new(),
            csv_path: None,
            dropped: 0,
            enriched: 0,
            duplicates_removed: run.duplicates_removed,
        }));
    }

    let raw_path = csv_store::save_scraped(&state.config.output_dir, &run.listings)?;

    // Round-trip through the file so the cleanup pass sees exactly what
    // was persisted.
    let loaded = csv_store::load(&raw_path)?;
    let report = cleaner::clean_listings(loaded, &keyword, &state.llm).await;
    let cleaned_path = csv_store::save_cleaned(&raw_path, &report.listings)?;

    Ok(Json(ScrapeResponse {
        keyword,
        total: report.listings.len(),
        listings: report.listings,
        csv_path: Some(cleaned_path.display().to_string()),
        dropped: report.dropped,
        enriched: report.enriched,
        duplicates_removed: run.duplicates_removed,
    }))
}

/// A keyword in the request wins; otherwise one is extracted from the
/// referenced resume.
async fn resolve_keyword(
    state: &AppState,
    resume_id: Option<Uuid>,
    keyword: Option<String>,
) -> Result<String, AppError> {
    if let Some(keyword) = keyword {
        let keyword = keyword.trim().to_string();
        if keyword.is_empty() {
            return Err(AppError::Validation("keyword must not be empty".to_string()));
        }
        return Ok(keyword);
    }

    let resume_id = resume_id.ok_or_else(|| {
        AppError::Validation("either keyword or resume_id is required".to_string())
    })?;
    let resume = state
        .resumes
        .get(resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    keywords::extract_keyword(&resume.text, &state.llm).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_request_defaults() {
        let request: ScrapeRequest = serde_json::from_str(r#"{"keyword": "python"}"#).unwrap();
        assert_eq!(request.keyword.as_deref(), Some("python"));
        assert!(request.resume_id.is_none());
        assert!(request.all_sources);
    }

    #[test]
    fn test_scrape_request_all_sources_off() {
        let request: ScrapeRequest =
            serde_json::from_str(r#"{"keyword": "python", "all_sources": false}"#).unwrap();
        assert!(!request.all_sources);
    }
}
