//! HTTP surface for sending the batch application email.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::listings::JobListing;
use crate::state::AppState;

use super::{send_application_email, SendSummary};

/// Listings arrive in the same shape the scrape endpoint returned them,
/// CSV header keys included.
#[derive(Debug, Deserialize)]
pub struct SendApplicationsRequest {
    pub resume_id: Uuid,
    pub listings: Vec<JobListing>,
}

/// POST /api/v1/applications/email
pub async fn handle_send_applications(
    State(state): State<AppState>,
    Json(request): Json<SendApplicationsRequest>,
) -> Result<Json<SendSummary>, AppError> {
    if request.listings.is_empty() {
        return Err(AppError::Validation(
            "listings must not be empty".to_string(),
        ));
    }

    let resume = state
        .resumes
        .get(request.resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", request.resume_id)))?;

    let summary = send_application_email(&state.config, &resume, &request.listings).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_scrape_shaped_listings() {
        let request: SendApplicationsRequest = serde_json::from_str(
            r#"{
                "resume_id": "00000000-0000-0000-0000-000000000000",
                "listings": [{
                    "Company": "TechCorp",
                    "Role": "Software Developer",
                    "Location": "Bangalore, Karnataka",
                    "Stipend (₹/month)": "₹20,000 - ₹25,000",
                    "Apply Link": "https://techcorp.com/apply",
                    "EmailID": "careers@techcorp.com"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(request.listings.len(), 1);
        assert_eq!(request.listings[0].company, "TechCorp");
        assert_eq!(request.listings[0].stipend, "₹20,000 - ₹25,000");
    }
}
