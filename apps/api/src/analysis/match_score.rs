//! Resume-to-job match scoring.
//!
//! Two backends behind one trait: the default asks the LLM for a 1-10
//! rating, and a deterministic keyword-overlap scorer serves as the
//! offline alternative. Scoring never fails a request; anything that goes
//! wrong collapses to the neutral midpoint.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::GroqClient;
use crate::search::SearchHit;

use super::prompts;

const MATCH_TEMPERATURE: f32 = 0.1;
/// Score used whenever a backend cannot produce a real one.
pub const DEFAULT_MATCH_SCORE: u8 = 5;
/// Prompt budget: descriptions and resumes are clipped before sending.
const DESCRIPTION_CLIP: usize = 500;
const RESUME_CLIP: usize = 1000;

#[async_trait]
pub trait MatchScorer: Send + Sync {
    /// Rates how well the resume fits the job, 1 (poor) to 10 (perfect).
    async fn score(&self, hit: &SearchHit, resume_text: &str) -> u8;
}

/// Default backend: one short LLM call per job.
pub struct LlmMatchScorer {
    llm: GroqClient,
}

impl LlmMatchScorer {
    pub fn new(llm: GroqClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(&self, hit: &SearchHit, resume_text: &str) -> u8 {
        let prompt = prompts::MATCH_PROMPT_TEMPLATE
            .replace("{job_title}", &hit.title)
            .replace("{company}", &hit.company)
            .replace("{description}", clip(&hit.description, DESCRIPTION_CLIP))
            .replace("{resume_text}", clip(resume_text, RESUME_CLIP));

        match self
            .llm
            .chat(prompts::MATCH_SYSTEM, &prompt, MATCH_TEMPERATURE)
            .await
        {
            Ok(reply) => parse_match_reply(&reply),
            Err(e) => {
                warn!("Match scoring failed for '{}': {e}", hit.title);
                DEFAULT_MATCH_SCORE
            }
        }
    }
}

/// Deterministic backend: the fraction of the job's meaningful words that
/// also appear in the resume, mapped onto 1-10.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(&self, hit: &SearchHit, resume_text: &str) -> u8 {
        let job_terms = significant_terms(&format!("{} {}", hit.title, hit.description));
        if job_terms.is_empty() {
            return DEFAULT_MATCH_SCORE;
        }

        let resume_terms = significant_terms(resume_text);
        let matched = job_terms.intersection(&resume_terms).count();
        let ratio = matched as f64 / job_terms.len() as f64;
        (1.0 + ratio * 9.0).round() as u8
    }
}

/// First whitespace token parsed as a number, truncated and clamped to
/// 1-10. Anything unparseable gets the neutral default.
pub fn parse_match_reply(reply: &str) -> u8 {
    reply
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| (value as i64).clamp(1, 10) as u8)
        .unwrap_or(DEFAULT_MATCH_SCORE)
}

/// Clips on a char boundary so multibyte text cannot split a code point.
fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Lowercased alphanumeric words of length >= 3.
fn significant_terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 3)
        .map(|w| w.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_hit(title: &str, description: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            company: "TechCorp".to_string(),
            location: "Bangalore".to_string(),
            description: description.to_string(),
            apply_link: "#".to_string(),
            posted_date: "2 days ago".to_string(),
            job_type: "Full-time".to_string(),
            salary: "N/A".to_string(),
            source: "LinkedIn".to_string(),
            thumbnail: String::new(),
            match_score: 0,
        }
    }

    #[test]
    fn test_parse_match_reply_plain_number() {
        assert_eq!(parse_match_reply("8"), 8);
        assert_eq!(parse_match_reply("7 out of 10"), 7);
    }

    #[test]
    fn test_parse_match_reply_decimal_truncates() {
        assert_eq!(parse_match_reply("8.7"), 8);
    }

    #[test]
    fn test_parse_match_reply_clamps() {
        assert_eq!(parse_match_reply("15"), 10);
        assert_eq!(parse_match_reply("0"), 1);
        assert_eq!(parse_match_reply("-3"), 1);
    }

    #[test]
    fn test_parse_match_reply_garbage_defaults() {
        assert_eq!(parse_match_reply("Nine"), DEFAULT_MATCH_SCORE);
        assert_eq!(parse_match_reply(""), DEFAULT_MATCH_SCORE);
        assert_eq!(parse_match_reply("8/10"), DEFAULT_MATCH_SCORE);
        assert_eq!(parse_match_reply("inf"), DEFAULT_MATCH_SCORE);
    }

    #[test]
    fn test_clip_char_boundary_safe() {
        let text = "₹₹₹₹₹₹₹₹₹₹";
        assert_eq!(clip(text, 4), "₹₹₹₹");
        assert_eq!(clip("short", 500), "short");
    }

    #[tokio::test]
    async fn test_keyword_scorer_full_overlap() {
        let hit = make_hit("Rust Developer", "Rust tokio axum backend services");
        let resume = "Built backend services in Rust with tokio and axum as a developer";
        let score = KeywordMatchScorer.score(&hit, resume).await;
        assert_eq!(score, 10);
    }

    #[tokio::test]
    async fn test_keyword_scorer_no_overlap() {
        let hit = make_hit("Marine Biologist", "whales plankton oceanography fieldwork");
        let resume = "Java Spring microservices Kubernetes";
        let score = KeywordMatchScorer.score(&hit, resume).await;
        assert_eq!(score, 1);
    }

    #[tokio::test]
    async fn test_keyword_scorer_empty_job_defaults() {
        let hit = make_hit("", "");
        let score = KeywordMatchScorer.score(&hit, "anything").await;
        assert_eq!(score, DEFAULT_MATCH_SCORE);
    }

    #[test]
    fn test_significant_terms_filters_short_words() {
        let terms = significant_terms("Go and ML in a team of 10 using Rust");
        assert!(terms.contains("rust"));
        assert!(terms.contains("team"));
        assert!(terms.contains("using"));
        assert!(!terms.contains("go"));
        assert!(!terms.contains("ml"));
    }
}
