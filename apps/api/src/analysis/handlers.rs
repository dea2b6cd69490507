//! HTTP surface for resume upload, retrieval, and the analysis features.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract;
use crate::resume_store::StoredResume;
use crate::state::AppState;

use super::insights::{self, AtsReport};
use super::keywords;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub characters: usize,
}

/// POST /api/v1/resumes
///
/// Multipart upload; the PDF must arrive in a field named `file`. Text is
/// extracted immediately so a broken PDF is rejected at upload time.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "resume.pdf".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let text = extract::extract_text_blocking(bytes.clone()).await?;
        let characters = text.chars().count();
        let resume_id = state.resumes.insert(filename.clone(), bytes, text);

        tracing::info!(
            "Stored resume {resume_id} ({filename}, {characters} chars); store holds {}",
            state.resumes.len()
        );

        return Ok(Json(UploadResponse {
            resume_id,
            filename,
            characters,
        }));
    }

    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub characters: usize,
    pub text: String,
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = fetch_resume(&state, id)?;
    Ok(Json(ResumeResponse {
        resume_id: id,
        filename: resume.filename,
        uploaded_at: resume.uploaded_at,
        characters: resume.text.chars().count(),
        text: resume.text,
    }))
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub resume_id: Uuid,
    pub analysis: String,
}

/// POST /api/v1/resumes/:id/analysis
pub async fn handle_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let resume = fetch_resume(&state, id)?;
    let analysis = insights::analyze_resume(&resume.text, &state.llm).await?;
    Ok(Json(AnalysisResponse {
        resume_id: id,
        analysis,
    }))
}

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub resume_id: Uuid,
    #[serde(flatten)]
    pub report: AtsReport,
}

/// POST /api/v1/resumes/:id/ats-score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let resume = fetch_resume(&state, id)?;
    let report = insights::ats_score(&resume.text, &state.llm).await?;
    Ok(Json(AtsScoreResponse {
        resume_id: id,
        report,
    }))
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub resume_id: Uuid,
    pub keyword: String,
}

/// POST /api/v1/resumes/:id/keyword
pub async fn handle_keyword(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<KeywordResponse>, AppError> {
    let resume = fetch_resume(&state, id)?;
    let keyword = keywords::extract_keyword(&resume.text, &state.llm).await?;
    Ok(Json(KeywordResponse {
        resume_id: id,
        keyword,
    }))
}

fn fetch_resume(state: &AppState, id: Uuid) -> Result<StoredResume, AppError> {
    state
        .resumes
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_response_flattens_report() {
        let response = AtsScoreResponse {
            resume_id: Uuid::nil(),
            report: AtsReport {
                score: Some(85),
                breakdown: "Good headers".to_string(),
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["score"], 85);
        assert_eq!(value["breakdown"], "Good headers");
        assert!(value.get("report").is_none());
    }
}
