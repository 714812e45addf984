//! Canned answers with simulated latency, used until a real service is configured.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::backend::{AnswerBackend, AnswerError, AnswerRequest};

pub const CANNED_ANSWERS: [&str; 4] = [
    "Based on the provided context, this question touches on fundamental philosophical principles. \
     The answer involves careful consideration of the underlying assumptions and logical structure.",
    "From a philosophical perspective, this inquiry requires us to examine the premises and apply \
     systematic reasoning to reach a well-founded conclusion.",
    "This question invites us to think critically about the relationship between the concepts \
     presented in the context and their broader implications.",
    "Using philosophical analysis, we can approach this by breaking down the components and \
     examining their logical connections.",
];

pub struct MockAnswerBackend {
    delay: Duration,
}

impl MockAnswerBackend {
    pub fn new(delay: Duration) -> Self { Self { delay } }

    /// No simulated latency.
    pub fn instant() -> Self { Self::new(Duration::ZERO) }

    pub fn delay(&self) -> Duration { self.delay }
}

impl Default for MockAnswerBackend {
    fn default() -> Self { Self::new(Duration::from_millis(2000)) }
}

#[async_trait]
impl AnswerBackend for MockAnswerBackend {
    async fn answer(&self, req: AnswerRequest) -> Result<String, AnswerError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let picked = CANNED_ANSWERS.choose(&mut rand::thread_rng()).copied();
        tracing::debug!(question = %req.question, "mock answer served");
        picked.map(str::to_string).ok_or(AnswerError::EmptyAnswer)
    }

    fn name(&self) -> &str { "mock" }
}
