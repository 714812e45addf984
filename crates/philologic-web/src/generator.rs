//! Flashcard generation flow: simulated latency, synthesis, and optional
//! backend-written answers.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use philologic_common::Flashcard;
use philologic_flashcards::{segment_notes, synthesize, SynthesisError};
use philologic_llm::{AnswerBackend, AnswerError, AnswerRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error("answer backend failed: {0}")]
    Backend(#[from] AnswerError),
}

pub struct FlashcardGenerator {
    delay: Duration,
    /// When set, each card's answer is written by this backend.
    answers: Option<Arc<dyn AnswerBackend>>,
}

impl FlashcardGenerator {
    pub fn new(delay: Duration, answers: Option<Arc<dyn AnswerBackend>>) -> Self {
        Self { delay, answers }
    }

    pub fn uses_backend(&self) -> bool { self.answers.is_some() }

    /// Produce a batch from notes. A backend failure fails the whole batch so
    /// nothing half-generated reaches the store.
    pub async fn generate(&self, notes: &str) -> Result<Vec<Flashcard>, GenerateError> {
        // Empty notes are rejected before the simulated latency.
        let mut cards = synthesize(notes, Utc::now().timestamp_millis())?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(backend) = &self.answers {
            let topics = segment_notes(notes);
            for (card, topic) in cards.iter_mut().zip(topics) {
                card.answer = backend.answer(AnswerRequest::for_topic(notes, topic)).await?;
            }
        }

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use philologic_flashcards::synthesis::GENERIC_ANSWER;

    struct EchoBackend;

    #[async_trait]
    impl AnswerBackend for EchoBackend {
        async fn answer(&self, req: AnswerRequest) -> Result<String, AnswerError> {
            Ok(req.question)
        }
        fn name(&self) -> &str { "echo" }
    }

    struct DownBackend;

    #[async_trait]
    impl AnswerBackend for DownBackend {
        async fn answer(&self, _req: AnswerRequest) -> Result<String, AnswerError> {
            Err(AnswerError::Unavailable("offline".to_string()))
        }
        fn name(&self) -> &str { "down" }
    }

    const NOTES: &str = "Justice requires balance. Hi. The soul seeks truth beyond shadows.";

    #[tokio::test]
    async fn test_static_answers_without_backend() {
        let gen = FlashcardGenerator::new(Duration::ZERO, None);
        let cards = gen.generate(NOTES).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.answer == GENERIC_ANSWER));
    }

    #[tokio::test]
    async fn test_backend_writes_answers_per_topic() {
        let gen = FlashcardGenerator::new(Duration::ZERO, Some(Arc::new(EchoBackend)));
        let cards = gen.generate(NOTES).await.unwrap();
        assert_eq!(cards[0].answer, "Explain the significance of: Justice requires balance");
        assert_eq!(cards[1].answer, "Explain the significance of: The soul seeks truth beyond shadows");
    }

    #[tokio::test]
    async fn test_backend_failure_fails_batch() {
        let gen = FlashcardGenerator::new(Duration::ZERO, Some(Arc::new(DownBackend)));
        assert!(matches!(gen.generate(NOTES).await, Err(GenerateError::Backend(_))));
    }

    #[tokio::test]
    async fn test_empty_notes_skip_latency() {
        let gen = FlashcardGenerator::new(Duration::from_secs(5), None);
        let outcome = tokio::time::timeout(Duration::from_millis(500), gen.generate("   ")).await;
        assert!(matches!(
            outcome,
            Ok(Err(GenerateError::Synthesis(SynthesisError::EmptyNotes)))
        ));
    }

    #[tokio::test]
    async fn test_valid_notes_wait_for_latency() {
        let gen = FlashcardGenerator::new(Duration::from_millis(50), None);
        let started = std::time::Instant::now();
        let cards = gen.generate(NOTES).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_empty_notes() {
        let gen = FlashcardGenerator::new(Duration::ZERO, None);
        assert!(matches!(
            gen.generate("  ").await,
            Err(GenerateError::Synthesis(SynthesisError::EmptyNotes))
        ));
    }
}
