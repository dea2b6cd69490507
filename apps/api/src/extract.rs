//! PDF text extraction for uploaded resumes.

use bytes::Bytes;

use crate::errors::AppError;

/// Pulls plain text out of an uploaded PDF.
/// Fails with `AppError::Extract` for corrupt files and for image-only
/// scans that contain no extractable text.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extract(format!("Could not read PDF: {e}")))?;

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(AppError::Extract(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

/// Async wrapper around [`extract_text`] for request handlers.
///
/// PDF parsing is CPU-bound, so it runs on the blocking pool instead of an
/// async executor thread. Extraction failures keep their `AppError::Extract`
/// mapping; only a crashed worker surfaces as `AppError::Internal`.
pub async fn extract_text_blocking(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })?
}

/// Collapses newlines and runs of whitespace into single spaces so page
/// boundaries disappear from the extracted text.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace_collapses_runs() {
        assert_eq!(
            normalize_whitespace("John  Doe\n\nSoftware   Engineer\tPython"),
            "John Doe Software Engineer Python"
        );
    }

    #[test]
    fn test_normalize_whitespace_empty() {
        assert_eq!(normalize_whitespace("  \n\t  "), "");
    }

    #[test]
    fn test_extract_text_rejects_non_pdf() {
        let result = extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::Extract(_))));
    }

    #[tokio::test]
    async fn test_extract_text_blocking_rejects_non_pdf() {
        let result = extract_text_blocking(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(matches!(result, Err(AppError::Extract(_))));
    }
}
