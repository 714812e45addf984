//! philologic-common: Shared records, errors, and markup helpers used across all PhiloLogic crates.

pub mod error;
pub mod escape;
pub mod models;

// Re-export commonly used types
pub use error::{ApiError, PhiloError, Result};
pub use escape::escape_html;
pub use models::{Flashcard, LearningModule, PhilosopherRecord};
