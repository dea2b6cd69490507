//! HTTP surface of the search feature.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::keywords;
use crate::errors::AppError;
use crate::state::AppState;

use super::SearchHit;

const DEFAULT_LOCATION: &str = "India";
const DEFAULT_JOB_TYPE: &str = "internship";
const DEFAULT_NUM_RESULTS: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub resume_id: Uuid,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub num_results: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub total: usize,
    pub jobs: Vec<SearchHit>,
}

/// POST /api/v1/jobs/search
///
/// Extracts a search keyword from the stored resume, queries Google Jobs,
/// and scores every hit against the resume, best matches first.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let resume = state
        .resumes
        .get(request.resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", request.resume_id)))?;

    let keyword = keywords::extract_keyword(&resume.text, &state.llm).await?;

    let location = request.location.as_deref().unwrap_or(DEFAULT_LOCATION);
    let job_type = request.job_type.as_deref().unwrap_or(DEFAULT_JOB_TYPE);
    let num_results = request.num_results.unwrap_or(DEFAULT_NUM_RESULTS);

    let mut jobs = state
        .search
        .search(&keyword, location, job_type, num_results)
        .await?;

    for job in &mut jobs {
        job.match_score = state.match_scorer.score(job, &resume.text).await;
    }
    jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    Ok(Json(SearchResponse {
        keyword,
        total: jobs.len(),
        jobs,
    }))
}
