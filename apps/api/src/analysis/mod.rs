//! Resume intelligence: LLM insights, ATS scoring, keyword extraction,
//! and resume-to-job match scoring.

pub mod handlers;
pub mod insights;
pub mod keywords;
pub mod match_score;
pub mod prompts;
