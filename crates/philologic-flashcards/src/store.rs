//! Session-scoped flashcard collection.

use philologic_common::Flashcard;
use serde::Serialize;

/// Ordered, append-only flashcards. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FlashcardStore {
    cards: Vec<Flashcard>,
}

impl FlashcardStore {
    pub fn new() -> Self { Self::default() }

    /// Add a batch after the existing cards. No deduplication.
    pub fn append(&mut self, batch: impl IntoIterator<Item = Flashcard>) -> usize {
        let before = self.cards.len();
        self.cards.extend(batch);
        self.cards.len() - before
    }

    pub fn len(&self) -> usize { self.cards.len() }

    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> { self.cards.iter() }

    pub fn as_slice(&self) -> &[Flashcard] { &self.cards }
}
