//! Flashcard markup.
//!
//! Each card is a `<label>` wrapping a hidden checkbox; the stylesheet flips
//! `.flashcard-inner` while the box is checked. Revealing a card is therefore
//! purely visual and never touches the stored data.

use philologic_common::{escape_html, Flashcard};

pub const EMPTY_PLACEHOLDER: &str =
    r#"<p class="placeholder-text">Submit study notes above to generate flashcards</p>"#;

/// Render one flippable card. Question and answer are escaped here.
pub fn render_card(card: &Flashcard) -> String {
    format!(r#"
        <label class="flashcard" data-id="{}">
            <input type="checkbox" class="flashcard-toggle" hidden>
            <div class="flashcard-inner">
                <div class="flashcard-front">
                    <h3>{}</h3>
                </div>
                <div class="flashcard-back">
                    <p>{}</p>
                </div>
            </div>
        </label>"#,
        card.id,
        escape_html(&card.question),
        escape_html(&card.answer))
}

/// Render every card in order, or the placeholder when there are none.
pub fn render_all(cards: &[Flashcard]) -> String {
    if cards.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    cards.iter().map(render_card).collect()
}
