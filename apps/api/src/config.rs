use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `GROQ_API_KEY` is required; every other knob has a default or is
/// optional and gates the feature that needs it (SerpAPI search, SMTP email).
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub serpapi_api_key: Option<String>,
    pub email_address: Option<String>,
    pub email_password: Option<String>,
    pub recipient_email: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender_name: String,
    pub output_dir: PathBuf,
    pub match_scorer: String,
    pub port: u16,
    pub rust_log: String,
}

/// Sender credentials plus recipient for the application email feature.
/// Built from config only when all three mail variables are set.
#[derive(Debug, Clone)]
pub struct MailAccount {
    pub address: String,
    pub password: String,
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            serpapi_api_key: optional_env("SERPAPI_API_KEY"),
            email_address: optional_env("EMAIL_ADDRESS"),
            email_password: optional_env("EMAIL_PASSWORD"),
            recipient_email: optional_env("RECIPIENT_EMAIL"),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            sender_name: std::env::var("SENDER_NAME").unwrap_or_else(|_| "Candidate".to_string()),
            output_dir: PathBuf::from(
                std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            ),
            match_scorer: std::env::var("MATCH_SCORER").unwrap_or_else(|_| "llm".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn mail_account(&self) -> Option<MailAccount> {
        Some(MailAccount {
            address: self.email_address.clone()?,
            password: self.email_password.clone()?,
            recipient: self.recipient_email.clone()?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and empty-string variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
