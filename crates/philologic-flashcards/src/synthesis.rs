//! Notes segmentation and flashcard synthesis.
//!
//! Notes are split on runs of sentence-terminal punctuation. Segments of ten
//! characters or fewer are dropped, and at most five topics survive, in order.

use std::sync::OnceLock;

use chrono::Utc;
use philologic_common::Flashcard;
use regex::Regex;
use thiserror::Error;

/// Segments with a trimmed length at or below this are not topics.
pub const MIN_TOPIC_CHARS: usize = 10;
/// Upper bound on cards produced from one submission.
pub const MAX_TOPICS: usize = 5;
/// Characters of the topic quoted in the question.
pub const PREVIEW_CHARS: usize = 50;

/// Answer used until a generation backend supplies one.
pub const GENERIC_ANSWER: &str = "This concept relates to the broader philosophical framework \
    and requires careful analysis of its implications and underlying principles.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Please enter some study notes")]
    EmptyNotes,
}

fn sentence_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"))
}

/// Split notes into candidate topics, trimmed, in original order.
pub fn segment_notes(notes: &str) -> Vec<&str> {
    sentence_breaks()
        .split(notes)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_TOPIC_CHARS)
        .take(MAX_TOPICS)
        .collect()
}

/// Question text for a topic: a fixed template around a bounded preview.
pub fn question_for(topic: &str) -> String {
    let preview: String = topic.trim().chars().take(PREVIEW_CHARS).collect();
    format!("What is the significance of: {}...?", preview)
}

/// Build flashcards from notes.
///
/// `now_ms` seeds the ids; card `i` of the batch gets `now_ms + i`, so ids are
/// unique within a batch. Empty notes are a user error. Notes without any
/// qualifying topic yield an empty batch.
pub fn synthesize(notes: &str, now_ms: i64) -> Result<Vec<Flashcard>, SynthesisError> {
    if notes.trim().is_empty() {
        return Err(SynthesisError::EmptyNotes);
    }

    let cards = segment_notes(notes)
        .into_iter()
        .enumerate()
        .map(|(i, topic)| Flashcard {
            id: now_ms + i as i64,
            question: question_for(topic),
            answer: GENERIC_ANSWER.to_string(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = cards.len(), "synthesized flashcards");
    Ok(cards)
}

/// [`synthesize`] stamped with the current time.
pub fn synthesize_now(notes: &str) -> Result<Vec<Flashcard>, SynthesisError> {
    synthesize(notes, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_short_segments_are_dropped() {
        let notes = "Justice requires balance. Hi. The soul seeks truth beyond shadows.";
        let cards = synthesize(notes, 1_000).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is the significance of: Justice requires balance...?");
        assert_eq!(
            cards[1].question,
            "What is the significance of: The soul seeks truth beyond shadows...?"
        );
    }

    #[test]
    fn test_only_short_segments_yield_nothing() {
        let cards = synthesize("Hi. Ok. No.", 1_000).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_empty_notes_is_user_error() {
        assert_eq!(synthesize("   \n\t ", 0), Err(SynthesisError::EmptyNotes));
        assert_eq!(synthesize("", 0), Err(SynthesisError::EmptyNotes));
    }

    #[test]
    fn test_at_most_five_cards() {
        let notes = (1..=8)
            .map(|i| format!("Topic number {} is about virtue", i))
            .collect::<Vec<_>>()
            .join(". ");
        let cards = synthesize(&notes, 0).unwrap();
        assert_eq!(cards.len(), MAX_TOPICS);
        assert!(cards[0].question.contains("Topic number 1 "));
        assert!(cards[4].question.contains("Topic number 5 "));
    }

    #[test]
    fn test_consecutive_terminators_split_once() {
        let segs = segment_notes("What is the good life?!? Virtue is knowledge... Really!!");
        assert_eq!(segs, vec!["What is the good life", "Virtue is knowledge"]);
    }

    #[test]
    fn test_exactly_ten_chars_is_too_short() {
        // "abcdefghij" is 10 chars, "abcdefghijk" is 11.
        assert_eq!(segment_notes("abcdefghij. abcdefghijk."), vec!["abcdefghijk"]);
    }

    #[test]
    fn test_preview_is_bounded_to_fifty_chars() {
        let long = "The unexamined life is not worth living according to Socrates at his trial";
        let q = question_for(long);
        let preview = q
            .strip_prefix("What is the significance of: ")
            .and_then(|s| s.strip_suffix("...?"))
            .unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
        assert!(long.starts_with(preview));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let topic = "é".repeat(60);
        let q = question_for(&topic);
        assert!(q.contains(&"é".repeat(50)));
        assert!(!q.contains(&"é".repeat(51)));
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let notes = "First long sentence here. Second long sentence here. Third long sentence here.";
        let cards = synthesize(notes, 1_700_000_000_000).unwrap();
        let ids: HashSet<i64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cards.len());
        assert_eq!(cards[0].id, 1_700_000_000_000);
        assert_eq!(cards[2].id, 1_700_000_000_002);
    }

    #[test]
    fn test_answer_is_generic() {
        let cards = synthesize_now("Eternal recurrence tests our affirmation of life.").unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, GENERIC_ANSWER);
    }
}
