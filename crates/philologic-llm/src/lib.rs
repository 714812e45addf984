//! philologic-llm: Answer generation behind a single async trait.
//!
//! Backends:
//!   MockAnswerBackend: canned philosophical answers after a simulated delay
//!   HttpAnswerBackend: any OpenAI-compatible chat completions endpoint

pub mod backend;
pub mod http;
pub mod mock;

pub use backend::{AnswerBackend, AnswerError, AnswerRequest};
pub use http::HttpAnswerBackend;
pub use mock::MockAnswerBackend;
