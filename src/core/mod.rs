//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, validated at construction, and cheap to copy.

mod constraint;
mod pattern;
mod word;

pub use constraint::{ConstraintError, GuessConstraint};
pub use pattern::{LetterFeedback, PATTERN_COUNT, Pattern, PatternError, simulate_guess_pattern};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
