//! Core domain types for Wordle
//!
//! Words, feedback patterns and observations. Everything here is pure and
//! deterministic.

mod observation;
mod pattern;
mod word;

pub use observation::Observation;
pub use pattern::{Mark, Pattern};
pub use word::{ALPHABET_SIZE, MAX_WORD_LEN, Word};
