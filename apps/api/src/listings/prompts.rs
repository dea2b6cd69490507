// LLM prompt constants for the listing cleanup pass.

/// System prompt for filling missing listing fields.
pub const ENRICH_SYSTEM: &str =
    "You are a job data enhancement expert. Fill in missing job information based on the \
    company name and other available details. Provide realistic values for missing fields. \
    Format your response exactly as requested.";

/// Enrichment prompt template. Replace `{company}`, `{missing}`, `{role}`,
/// `{location}`, `{stipend}` and `{keyword}` before sending; fields being
/// requested are shown to the model as the literal word MISSING.
pub const ENRICH_PROMPT_TEMPLATE: &str = r#"For a job at {company}, I need to fill in the following missing fields: {missing}.

Available information:
- Company: {company}
- Role: {role}
- Location: {location}
- Stipend: {stipend}
- Job Search Keyword: {keyword}

For each missing field, provide a realistic value based on the company and available information.
Format your response exactly like this example:
Role: Software Engineer
Location: Bangalore, Karnataka
Stipend: ₹25,000 - ₹30,000

Only include the missing fields in your response."#;
