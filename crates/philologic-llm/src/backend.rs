//! Answer backend trait and shared request/error types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
    #[error("Backend returned an empty answer")]
    EmptyAnswer,
}

// ── Request ───────────────────────────────────────────────────────────────────

/// Text in: a question plus the passage it is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub context: String,
    pub question: String,
}

impl AnswerRequest {
    pub fn new(context: impl Into<String>, question: impl Into<String>) -> Self {
        Self { context: context.into(), question: question.into() }
    }

    /// Request an explanation of a flashcard topic taken from study notes.
    pub fn for_topic(notes: &str, topic: &str) -> Self {
        Self::new(notes, format!("Explain the significance of: {}", topic))
    }
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Text in, text out. Handlers only ever see this trait, so the mock can be
/// swapped for a real service from configuration alone.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn answer(&self, req: AnswerRequest) -> Result<String, AnswerError>;
    fn name(&self) -> &str;
}
