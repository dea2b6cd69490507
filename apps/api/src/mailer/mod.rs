//! Batch application email: a plain-text summary with the resume PDF and
//! the listings CSV attached, sent over SMTP with STARTTLS.

pub mod handlers;

use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Serialize;
use tracing::info;

use crate::config::{Config, MailAccount};
use crate::errors::AppError;
use crate::listings::{csv_store, JobListing};
use crate::resume_store::StoredResume;

/// Outcome summary included in the response payload.
#[derive(Debug, Serialize)]
pub struct SendSummary {
    pub recipient: String,
    pub positions: usize,
    pub resume_filename: String,
    pub csv_filename: String,
}

/// Composes and sends the application email. Fails with `NotConfigured`
/// when the mail variables are absent; all other failures are `Mail`.
pub async fn send_application_email(
    config: &Config,
    resume: &StoredResume,
    listings: &[JobListing],
) -> Result<SendSummary, AppError> {
    let account = config.mail_account().ok_or_else(|| {
        AppError::NotConfigured(
            "EMAIL_ADDRESS, EMAIL_PASSWORD and RECIPIENT_EMAIL must be set".to_string(),
        )
    })?;

    let csv_filename = format!(
        "job_applications_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let csv_content = csv_store::render_string(listings)?;
    let body = compose_body(listings.len(), &resume.filename, &config.sender_name);

    let from: Mailbox = account.address.parse().map_err(|_| {
        AppError::Validation(format!(
            "EMAIL_ADDRESS '{}' is not a valid address",
            account.address
        ))
    })?;
    let to: Mailbox = account.recipient.parse().map_err(|_| {
        AppError::Validation(format!(
            "RECIPIENT_EMAIL '{}' is not a valid address",
            account.recipient
        ))
    })?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(format!(
            "Job Applications Submitted - {} Positions",
            listings.len()
        ))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body))
                .singlepart(
                    Attachment::new(resume.filename.clone())
                        .body(resume.bytes.to_vec(), content_type("application/pdf")),
                )
                .singlepart(
                    Attachment::new(csv_filename.clone())
                        .body(csv_content.into_bytes(), content_type("text/csv")),
                ),
        )
        .map_err(|e| AppError::Mail(format!("Could not build message: {e}")))?;

    let transport = build_transport(config, &account)?;
    transport
        .send(message)
        .await
        .map_err(|e| AppError::Mail(format!("SMTP send failed: {e}")))?;

    info!(
        "Application email sent to {} ({} positions)",
        account.recipient,
        listings.len()
    );

    Ok(SendSummary {
        recipient: account.recipient,
        positions: listings.len(),
        resume_filename: resume.filename.clone(),
        csv_filename,
    })
}

fn build_transport(
    config: &Config,
    account: &MailAccount,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, AppError> {
    let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        .map_err(|e| AppError::Mail(format!("SMTP relay setup failed: {e}")))?;

    Ok(builder
        .port(config.smtp_port)
        .credentials(Credentials::new(
            account.address.clone(),
            account.password.clone(),
        ))
        .build())
}

fn content_type(mime: &str) -> ContentType {
    // Only called with literal MIME strings.
    ContentType::parse(mime).expect("static content type must parse")
}

fn compose_body(positions: usize, resume_filename: &str, sender_name: &str) -> String {
    format!(
        r#"Dear Team,

I have successfully applied to {positions} job positions through the ResumeScout system.

Application Summary:
- Total positions applied: {positions}
- Application date: {date}
- Resume file: {resume_filename}

Please find the following attachments:
1. My resume (PDF format)
2. Complete job listings with company details (CSV format)

The CSV file contains all the job details including:
- Company names
- Job roles
- Locations
- Stipend information
- Application links
- Contact emails

Thank you for your consideration.

Best regards,
{sender_name}
Generated via ResumeScout"#,
        positions = positions,
        date = Local::now().format("%Y-%m-%d %H:%M:%S"),
        resume_filename = resume_filename,
        sender_name = sender_name,
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn make_config() -> Config {
        Config {
            groq_api_key: "test-key".to_string(),
            serpapi_api_key: None,
            email_address: Some("sender@example.com".to_string()),
            email_password: Some("app-password".to_string()),
            recipient_email: Some("recruiter@example.com".to_string()),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            sender_name: "Jane Applicant".to_string(),
            output_dir: PathBuf::from("."),
            match_scorer: "llm".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_compose_body_mentions_everything() {
        let body = compose_body(7, "jane_resume.pdf", "Jane Applicant");
        assert!(body.contains("applied to 7 job positions"));
        assert!(body.contains("- Total positions applied: 7"));
        assert!(body.contains("- Resume file: jane_resume.pdf"));
        assert!(body.contains("1. My resume (PDF format)"));
        assert!(body.contains("2. Complete job listings with company details (CSV format)"));
        assert!(body.ends_with("Jane Applicant\nGenerated via ResumeScout"));
    }

    #[tokio::test]
    async fn test_build_transport_with_valid_host() {
        let config = make_config();
        let account = config.mail_account().unwrap();
        assert!(build_transport(&config, &account).is_ok());
    }

    #[test]
    fn test_mail_account_requires_all_three() {
        let mut config = make_config();
        config.recipient_email = None;
        assert!(config.mail_account().is_none());
        assert!(make_config().mail_account().is_some());
    }
}
