//! Wordle Advisor
//!
//! Recommends the next Wordle guess by maximizing the expected information of the feedback,
//! over answer and guess lists supplied by the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{GuessConstraint, Pattern, Word};
//! use wordle_advisor::solver::{GuessSelector, filter_words};
//! use wordle_advisor::wordlists::WordStore;
//!
//! let store = WordStore::from_strs(&["BATCH", "HATCH", "MATCH", "PATCH", "SLATE"], &["BUMPH"]).unwrap();
//! let selector = GuessSelector::with_defaults(&store).unwrap();
//!
//! // Feedback a guess receives against a target
//! let guess = Word::new("slate").unwrap();
//! let pattern = Pattern::calculate(&guess, &Word::new("match").unwrap());
//! assert_eq!(pattern.to_string(), "XXYYX");
//!
//! // Narrow the answers, then ask for the next guess
//! let history = [GuessConstraint::new(guess, pattern)];
//! let remaining = filter_words(store.answers(), &history);
//! assert_eq!(remaining.len(), 4);
//!
//! let best = selector.get_best_guess(&remaining, store.guesses(), &history).unwrap();
//! assert_eq!(best.text(), "BUMPH");
//! ```

// Core domain types
pub mod core;

// Decision engine
pub mod solver;

// Word lists
pub mod wordlists;

// String-level entry points
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
