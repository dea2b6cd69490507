//! Search keyword extraction from resume text.

use crate::errors::AppError;
use crate::llm_client::GroqClient;

use super::prompts;

const KEYWORD_TEMPERATURE: f32 = 0.3;

/// Asks the LLM for the single most marketable job title or skill in the
/// resume, usable as a board search term.
pub async fn extract_keyword(text: &str, llm: &GroqClient) -> Result<String, AppError> {
    let prompt = prompts::KEYWORD_PROMPT_TEMPLATE.replace("{resume_text}", text);
    let reply = llm
        .chat(prompts::KEYWORD_SYSTEM, &prompt, KEYWORD_TEMPERATURE)
        .await?;

    let keyword = tidy_keyword(&reply);
    if keyword.is_empty() {
        return Err(AppError::Llm(
            "Keyword extraction returned nothing usable".to_string(),
        ));
    }
    Ok(keyword)
}

/// Models sometimes return a comma list despite the prompt; keep only the
/// first entry.
pub fn tidy_keyword(reply: &str) -> String {
    reply
        .trim()
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tidy_keyword_passthrough() {
        assert_eq!(tidy_keyword("Software Engineer"), "Software Engineer");
    }

    #[test]
    fn test_tidy_keyword_takes_first_of_list() {
        assert_eq!(
            tidy_keyword("Python Developer, Data Science, ML"),
            "Python Developer"
        );
    }

    #[test]
    fn test_tidy_keyword_trims() {
        assert_eq!(tidy_keyword("  Data Analyst \n"), "Data Analyst");
        assert_eq!(tidy_keyword("   "), "");
    }
}
