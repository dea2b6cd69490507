//! Job search through the SerpAPI Google Jobs engine.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// One job from the search API, shaped for the response payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub posted_date: String,
    pub job_type: String,
    pub salary: String,
    pub source: String,
    pub thumbnail: String,
    pub match_score: u8,
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    jobs_results: Vec<SerpJob>,
}

#[derive(Debug, Deserialize)]
struct SerpJob {
    title: Option<String>,
    company_name: Option<String>,
    location: Option<String>,
    description: Option<String>,
    apply_link: Option<String>,
    via: Option<String>,
    thumbnail: Option<String>,
    #[serde(default)]
    detected_extensions: SerpExtensions,
}

#[derive(Debug, Default, Deserialize)]
struct SerpExtensions {
    posted_at: Option<String>,
    schedule_type: Option<String>,
    salary: Option<String>,
}

impl From<SerpJob> for SearchHit {
    fn from(job: SerpJob) -> Self {
        let ext = job.detected_extensions;
        let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());

        SearchHit {
            title: or_na(job.title),
            company: or_na(job.company_name),
            location: or_na(job.location),
            description: or_na(job.description),
            apply_link: job.apply_link.unwrap_or_else(|| "#".to_string()),
            posted_date: or_na(ext.posted_at),
            job_type: or_na(ext.schedule_type),
            salary: or_na(ext.salary),
            source: or_na(job.via),
            thumbnail: job.thumbnail.unwrap_or_default(),
            // Attached after scoring.
            match_score: 0,
        }
    }
}

/// Client for the Google Jobs engine. The API key is optional at startup;
/// without it the search endpoint reports itself unconfigured.
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl SearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Queries `{keyword} {job_type}` against Google Jobs and maps the
    /// results into [`SearchHit`]s.
    pub async fn search(
        &self,
        keyword: &str,
        location: &str,
        job_type: &str,
        num_results: u32,
    ) -> Result<Vec<SearchHit>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::NotConfigured("SERPAPI_API_KEY is not set".to_string()))?;

        let query = format!("{keyword} {job_type}");
        let num = num_results.to_string();

        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("engine", "google_jobs"),
                ("q", query.as_str()),
                ("location", location),
                ("api_key", api_key),
                ("num", num.as_str()),
                ("start", "0"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Search(format!("SerpAPI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Search(format!(
                "SerpAPI returned {status}: {body}"
            )));
        }

        let parsed: SerpResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Could not parse SerpAPI response: {e}")))?;

        debug!("SerpAPI returned {} jobs", parsed.jobs_results.len());
        Ok(parsed.jobs_results.into_iter().map(SearchHit::from).collect())
    }
}
