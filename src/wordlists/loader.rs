//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Blank lines are skipped; anything else
//! that is not a valid word is an error rather than being silently dropped.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    InvalidWord { line: usize, source: WordError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
            Self::InvalidWord { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::InvalidWord` with
/// the 1-based line number of the first malformed entry.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first non-blank line that is not a word.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::new(line.trim()).map_err(|source| LoadError::InvalidWord { line: i + 1, source })
        })
        .collect()
}
