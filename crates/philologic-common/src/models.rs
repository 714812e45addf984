/// Core records shared by the catalog, flashcard, and web crates.
/// JSON field names match the catalog API (`work_title`, `reasoning_framework`, …).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Philosopher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosopherRecord {
    pub id: i64,
    pub name: String,
    pub work_title: String,
    pub description: String,
    /// Not every catalog endpoint emits this field.
    #[serde(default)]
    pub reasoning_framework: String,
}

// ---------------------------------------------------------------------------
// Learning module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningModule {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub philosopher_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: u8,
    #[serde(default)]
    pub is_premium: bool,
}

fn default_difficulty() -> u8 { 1 }

// ---------------------------------------------------------------------------
// Flashcard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Creation time in epoch milliseconds plus the card's index in its batch.
    pub id: i64,
    pub question: String,
    pub answer: String,
}
