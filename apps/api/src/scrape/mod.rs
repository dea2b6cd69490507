//! Multi-site job scraping pipeline.
//!
//! Each board implements [`sites::JobSite`]: it knows its page URLs and how
//! to pull listings out of its HTML. The shared runner fetches pages,
//! enforces the per-source cap, paces requests, and finishes raw card data
//! into [`JobListing`]s. Individual page failures are logged and skipped;
//! a board that fails entirely never aborts the run.

pub mod backfill;
pub mod handlers;
pub mod sites;
mod throttle;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::{info, warn};

use crate::listings::{dedup_listings, JobListing};

use self::sites::{Glassdoor, Internshala, JobSite, Linkedin, Naukri, RawListing};

/// Total listings the pipeline aims for across all sources.
const TARGET_COUNT: usize = 50;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Values a board renders for fields it has no data for.
const INVALID_VALUES: [&str; 7] = [
    "n/a",
    "na",
    "",
    "null",
    "none",
    "not specified",
    "not available",
];

#[derive(Debug)]
pub struct ScrapeRun {
    pub listings: Vec<JobListing>,
    pub duplicates_removed: usize,
}

/// Shared runner for every job board.
#[derive(Clone)]
pub struct JobScraper {
    client: reqwest::Client,
    target_count: usize,
}

impl JobScraper {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .default_headers(headers)
                .cookie_store(true)
                .build()
                .expect("Failed to build HTTP client"),
            target_count: TARGET_COUNT,
        }
    }

    /// Scrapes either every supported board or just the reliable pair,
    /// then dedups across sources.
    pub async fn run(&self, keyword: &str, all_sources: bool) -> ScrapeRun {
        info!(
            "Starting job scrape for '{keyword}' (target: {} listings)",
            self.target_count
        );

        let boards: Vec<Box<dyn JobSite>> = if all_sources {
            vec![
                Box::new(Internshala),
                Box::new(Naukri),
                Box::new(Linkedin),
                Box::new(Glassdoor),
            ]
        } else {
            vec![Box::new(Naukri), Box::new(Linkedin)]
        };

        let mut collected = Vec::new();
        for board in &boards {
            let found = self.scrape_board(board.as_ref(), keyword).await;
            info!("{}: collected {} listings", board.name(), found.len());
            collected.extend(found);
        }

        let (listings, duplicates_removed) = dedup_listings(collected);
        info!(
            "Scrape finished: {} unique listings ({duplicates_removed} duplicates removed)",
            listings.len()
        );

        ScrapeRun {
            listings,
            duplicates_removed,
        }
    }

    async fn scrape_board(&self, board: &dyn JobSite, keyword: &str) -> Vec<JobListing> {
        let cap = board.source_cap(self.target_count);
        let mut found = Vec::new();

        for page in 1..=board.max_pages() {
            if found.len() >= cap {
                break;
            }

            let url = board.page_url(keyword, page);
            let Some(html) = self.fetch_page(&url).await else {
                continue;
            };

            let cards = board.parse_page(&html);
            info!("{}: page {page} produced {} cards", board.name(), cards.len());

            for raw in cards {
                if found.len() >= cap {
                    break;
                }
                if !is_valid_listing(&raw.company, &raw.apply_link) {
                    continue;
                }
                found.push(finish_listing(raw, keyword));
            }

            throttle::page_pause().await;
        }

        found
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Request to {url} failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Fetch of {url} returned status {status}");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Reading body from {url} failed: {e}");
                None
            }
        }
    }
}

impl Default for JobScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// A card is worth keeping only when both the company and the apply link
/// came out of the page usable. Everything else is backfillable.
fn is_valid_listing(company: &str, apply_link: &str) -> bool {
    let invalid = |v: &str| INVALID_VALUES.contains(&v.trim().to_lowercase().as_str());
    !invalid(company) && !invalid(apply_link)
}

/// Backfills whatever the board left blank and attaches a contact email.
fn finish_listing(raw: RawListing, keyword: &str) -> JobListing {
    let filled = backfill::fill_missing(raw, keyword);
    let contact_email = backfill::contact_email(&filled.company);

    JobListing {
        company: filled.company,
        role: filled.role,
        location: filled.location,
        stipend: filled.stipend,
        apply_link: filled.apply_link,
        contact_email,
    }
}
