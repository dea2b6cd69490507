// All LLM prompt constants for the analysis module.

/// System prompt for the full resume review.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert career counselor and resume analyst. Provide comprehensive insights \
    about the resume including:\n\
    1. Overall assessment and strengths\n\
    2. Areas for improvement\n\
    3. Suitable job roles and industries\n\
    4. Skill gaps to address\n\
    5. Career progression suggestions\n\
    6. ATS optimization tips\n\
    7. Market competitiveness analysis\n\n\
    Format your response in clear sections with actionable recommendations.";

/// Resume review prompt template. Replace `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please analyze this resume comprehensively. The person wants to understand:
- What are their key strengths and skills?
- What types of jobs/roles would be best suited for them?
- What industries should they target?
- How can they improve their resume?
- What skills should they develop further?
- How competitive is their profile in the current job market?

Resume content:
{resume_text}"#;

/// System prompt for ATS compatibility scoring.
pub const ATS_SYSTEM: &str =
    "You are an ATS (Applicant Tracking System) expert. Analyze the resume and provide:\n\
    1. Overall ATS Score (0-100)\n\
    2. Detailed breakdown of scoring criteria\n\
    3. Specific recommendations to improve ATS compatibility\n\
    4. Missing elements that ATS systems look for\n\
    5. Formatting issues that might cause problems\n\n\
    Be precise and actionable in your recommendations.";

/// ATS scoring prompt template. Replace `{resume_text}` before sending.
/// The response contract is the opening "ATS Score: X/100" line, which
/// the parser depends on.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Please analyze this resume for ATS compatibility and provide a detailed score breakdown:

Evaluate based on:
- Contact information completeness
- Use of standard section headers
- Keyword optimization
- File format and readability
- Proper formatting (bullets, dates, etc.)
- Skills section presence and quality
- Quantified achievements
- Professional summary/objective
- Education section formatting
- Work experience structure
- Length and organization

Provide the overall score as "ATS Score: X/100" at the beginning.

Resume content:
{resume_text}"#;

/// System prompt for extracting a single search keyword from a resume.
pub const KEYWORD_SYSTEM: &str =
    "You are a job search expert. Extract the SINGLE most relevant job title or keyword \
    from the resume. Just return the job title or keyword.\n\n\
    Focus on:\n\
    1. The most suitable job title the person is qualified for\n\
    2. The most marketable technical skill\n\n\
    Return ONLY ONE specific and searchable term (e.g., \"Software Engineer\", \
    \"Data Analyst\", \"Python Developer\"). This should be the most relevant job title \
    or skill that will yield the best job search results. Don't include generic terms \
    like \"motivated\" or \"hardworking\".";

/// Keyword extraction prompt template. Replace `{resume_text}` before sending.
pub const KEYWORD_PROMPT_TEMPLATE: &str =
    r#"Extract the single most relevant job title or keyword from this resume:
{resume_text}"#;

/// System prompt for resume-to-job match scoring.
pub const MATCH_SYSTEM: &str =
    "You are a job matching expert. Compare the job description with the resume and \
    provide a match score from 1-10.\n\n\
    Consider:\n\
    - Skills alignment (40%)\n\
    - Experience level match (30%)\n\
    - Industry relevance (20%)\n\
    - Role suitability (10%)\n\n\
    Return ONLY a number from 1-10, where 10 is a perfect match.";

/// Match scoring prompt template. Replace `{job_title}`, `{company}`,
/// `{description}` and `{resume_text}` before sending; the text fields
/// arrive pre-clipped.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Rate this job match (1-10):

JOB: {job_title} at {company}
DESCRIPTION: {description}...

RESUME: {resume_text}..."#;
