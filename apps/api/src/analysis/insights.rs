//! Full-resume review and ATS compatibility scoring.

use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::GroqClient;

use super::prompts;

const ANALYSIS_TEMPERATURE: f32 = 0.7;
const ATS_TEMPERATURE: f32 = 0.3;

/// Career-counselor style review of the whole resume, returned as
/// free-form sectioned text.
pub async fn analyze_resume(text: &str, llm: &GroqClient) -> Result<String, AppError> {
    let prompt = prompts::ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", text);
    Ok(llm
        .chat(prompts::ANALYSIS_SYSTEM, &prompt, ANALYSIS_TEMPERATURE)
        .await?)
}

/// ATS verdict: the numeric score when the model produced a parseable one,
/// plus the full breakdown text either way.
#[derive(Debug, PartialEq, Serialize)]
pub struct AtsReport {
    pub score: Option<u32>,
    pub breakdown: String,
}

pub async fn ats_score(text: &str, llm: &GroqClient) -> Result<AtsReport, AppError> {
    let prompt = prompts::ATS_PROMPT_TEMPLATE.replace("{resume_text}", text);
    let reply = llm.chat(prompts::ATS_SYSTEM, &prompt, ATS_TEMPERATURE).await?;
    Ok(parse_ats_reply(&reply))
}

/// The model is told to open with "ATS Score: X/100". The first line
/// carrying that marker supplies the score; the remaining lines become
/// the breakdown. A missing or malformed marker leaves the score unset
/// rather than failing the request.
pub fn parse_ats_reply(reply: &str) -> AtsReport {
    let Some(score_line) = reply.lines().find(|line| line.contains("ATS Score:")) else {
        return AtsReport {
            score: None,
            breakdown: reply.trim().to_string(),
        };
    };

    let score = score_line
        .splitn(2, ':')
        .nth(1)
        .and_then(|rest| rest.split('/').next())
        .and_then(|n| n.trim().parse::<u32>().ok());

    let breakdown = reply
        .lines()
        .filter(|line| *line != score_line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    AtsReport { score, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ats_reply_well_formed() {
        let reply = "ATS Score: 85/100\n\nStrengths:\n- Clear section headers\n- Good keywords";
        let report = parse_ats_reply(reply);
        assert_eq!(report.score, Some(85));
        assert!(report.breakdown.starts_with("Strengths:"));
        assert!(!report.breakdown.contains("ATS Score"));
    }

    #[test]
    fn test_parse_ats_reply_marker_mid_text() {
        let reply = "Here is my analysis.\nOverall ATS Score: 72/100\nDetails follow.";
        let report = parse_ats_reply(reply);
        assert_eq!(report.score, Some(72));
        assert_eq!(report.breakdown, "Here is my analysis.\nDetails follow.");
    }

    #[test]
    fn test_parse_ats_reply_no_marker() {
        let reply = "The resume is generally fine.";
        let report = parse_ats_reply(reply);
        assert_eq!(report.score, None);
        assert_eq!(report.breakdown, "The resume is generally fine.");
    }

    #[test]
    fn test_parse_ats_reply_unparseable_score() {
        let reply = "ATS Score: excellent/100\nGood work.";
        let report = parse_ats_reply(reply);
        assert_eq!(report.score, None);
        assert_eq!(report.breakdown, "Good work.");
    }

    #[test]
    fn test_parse_ats_reply_markdown_decorations() {
        let reply = "**ATS Score: 91/100**\nNearly perfect.";
        let report = parse_ats_reply(reply);
        assert_eq!(report.score, Some(91));
    }
}
