//! Word lists for Wordle solving
//!
//! A [`WordStore`] is the immutable pair of collections every engine call reads from: the
//! answer list (possible targets) and the guess list (everything a player may submit).
//! Build it once, then share it by reference across sessions.

pub mod loader;

use crate::core::{Word, WordError};
use log::warn;
use rustc_hash::FxHashSet;
use std::fmt;

/// Immutable answers/guesses handle
///
/// Invariants: both lists are free of duplicates, the answer list is non-empty, and the
/// guess list is a superset of the answer list.
#[derive(Debug, Clone)]
pub struct WordStore {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    answer_set: FxHashSet<Word>,
    guess_set: FxHashSet<Word>,
}

/// Which list a rejected word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    Answers,
    Guesses,
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answers => f.write_str("answers"),
            Self::Guesses => f.write_str("guesses"),
        }
    }
}

/// Error type for store construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordStoreError {
    EmptyAnswers,
    InvalidWord {
        list: WordList,
        index: usize,
        source: WordError,
    },
}

impl fmt::Display for WordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswers => write!(f, "answer list is empty"),
            Self::InvalidWord {
                list,
                index,
                source,
            } => write!(f, "{list} list entry {index}: {source}"),
        }
    }
}

impl std::error::Error for WordStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyAnswers => None,
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl WordStore {
    /// Build a store from validated words
    ///
    /// Duplicates are dropped (first occurrence wins) and answers missing from the guess
    /// list are appended to it.
    ///
    /// # Errors
    /// Returns `WordStoreError::EmptyAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, WordStoreError> {
        let (answers, answer_set) = dedup_in_order(answers, WordList::Answers);
        if answers.is_empty() {
            return Err(WordStoreError::EmptyAnswers);
        }

        let (mut guesses, mut guess_set) = dedup_in_order(guesses, WordList::Guesses);
        let before = guesses.len();
        guesses.extend(answers.iter().copied().filter(|w| guess_set.insert(*w)));
        if guesses.len() > before {
            warn!(
                "{} answer words missing from the guess list were added to it",
                guesses.len() - before
            );
        }

        Ok(Self {
            answers,
            guesses,
            answer_set,
            guess_set,
        })
    }

    /// Build a store from raw strings, rejecting the first malformed entry
    ///
    /// # Errors
    /// Returns `WordStoreError::InvalidWord` naming the list and index of a malformed
    /// entry, or `EmptyAnswers`.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::wordlists::WordStore;
    ///
    /// let store = WordStore::from_strs(&["crane", "slate"], &["adieu"]).unwrap();
    /// assert_eq!(store.answers().len(), 2);
    /// assert_eq!(store.guesses().len(), 3); // answers are always guessable
    ///
    /// assert!(WordStore::from_strs(&["cr4ne"], &[]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(answers: &[S], guesses: &[S]) -> Result<Self, WordStoreError> {
        let answers = parse_list(answers, WordList::Answers)?;
        let guesses = parse_list(guesses, WordList::Guesses)?;
        Self::new(answers, guesses)
    }

    /// Possible target words
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every word a player may submit (superset of the answers)
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guess_set.contains(word)
    }

    /// Whether `word` may be the hidden answer
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_set.contains(word)
    }
}

fn parse_list<S: AsRef<str>>(raw: &[S], list: WordList) -> Result<Vec<Word>, WordStoreError> {
    raw.iter()
        .enumerate()
        .map(|(index, s)| {
            Word::new(s.as_ref()).map_err(|source| WordStoreError::InvalidWord {
                list,
                index,
                source,
            })
        })
        .collect()
}

/// Unique words in first-seen order, plus the set of them
fn dedup_in_order(words: Vec<Word>, list: WordList) -> (Vec<Word>, FxHashSet<Word>) {
    let total = words.len();
    let mut seen = FxHashSet::default();
    let unique: Vec<Word> = words.into_iter().filter(|w| seen.insert(*w)).collect();
    if unique.len() < total {
        warn!("dropped {} duplicate {list} entries", total - unique.len());
    }
    (unique, seen)
}
