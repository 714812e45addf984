//! philologic-flashcards: Turns study notes into flashcards and renders them.
//!
//!   - `synthesis`: sentence segmentation and question/answer synthesis
//!   - `store`    : the ordered, append-only collection for one session
//!   - `render`   : flippable card markup (all text escaped)

pub mod render;
pub mod store;
pub mod synthesis;

pub use render::render_all;
pub use store::FlashcardStore;
pub use synthesis::{segment_notes, synthesize, synthesize_now, SynthesisError};
