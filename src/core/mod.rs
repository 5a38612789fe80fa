//! Core domain types for Goobie
//!
//! Words, per-letter feedback, and the cumulative keyboard map. Everything
//! here is pure and has no knowledge of sessions or persistence.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterState, LetterStatus};
pub use keyboard::KeyboardStatusMap;
pub use word::{WORD_LENGTH, Word, WordError};
