//! In-memory store for uploaded resumes.
//!
//! Uploads live for the lifetime of the process; the only durable artifacts
//! this service produces are the CSV exports written by the scrape pipeline.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An uploaded resume: the original PDF bytes (kept for the email
/// attachment) plus the extracted plain text used by every LLM feature.
#[derive(Debug, Clone)]
pub struct StoredResume {
    pub filename: String,
    pub bytes: Bytes,
    pub text: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct ResumeStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredResume>>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, filename: String, bytes: Bytes, text: String) -> Uuid {
        let id = Uuid::new_v4();
        let resume = StoredResume {
            filename,
            bytes,
            text,
            uploaded_at: Utc::now(),
        };
        self.inner
            .write()
            .expect("resume store lock poisoned")
            .insert(id, resume);
        id
    }

    /// Returns a clone of the stored resume. `Bytes` makes the PDF clone
    /// a cheap refcount bump rather than a copy.
    pub fn get(&self, id: Uuid) -> Option<StoredResume> {
        self.inner
            .read()
            .expect("resume store lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("resume store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_round_trip() {
        let store = ResumeStore::new();
        let id = store.insert(
            "resume.pdf".to_string(),
            Bytes::from_static(b"%PDF-1.4"),
            "John Doe, Software Engineer".to_string(),
        );

        let stored = store.get(id).expect("resume should be present");
        assert_eq!(stored.filename, "resume.pdf");
        assert_eq!(stored.text, "John Doe, Software Engineer");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = ResumeStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique_per_insert() {
        let store = ResumeStore::new();
        let a = store.insert("a.pdf".into(), Bytes::new(), "text a".into());
        let b = store.insert("b.pdf".into(), Bytes::new(), "text b".into());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
