//! A completed round: the guessed word and the feedback observed for it

use super::{Pattern, PatternError, Word, WordError};
use std::fmt;

/// One (guess, feedback) pair from a game's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessConstraint {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Error for a (word, pattern) pair that fails structural validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    Word(WordError),
    Pattern(PatternError),
    /// Input was not of the form `WORD=PATTERN`
    Malformed(String),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "invalid guess word: {e}"),
            Self::Pattern(e) => write!(f, "invalid feedback pattern: {e}"),
            Self::Malformed(input) => {
                write!(f, "expected WORD=PATTERN (e.g. CRANE=XYGXX), got {input:?}")
            }
        }
    }
}

impl std::error::Error for ConstraintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::Malformed(_) => None,
        }
    }
}

impl From<WordError> for ConstraintError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<PatternError> for ConstraintError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl GuessConstraint {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// The constraint produced by guessing `guess` when the answer is `target`
    #[must_use]
    pub fn observed(guess: Word, target: &Word) -> Self {
        Self::new(guess, Pattern::calculate(&guess, target))
    }

    /// Validate and build a constraint from its string exchange form
    ///
    /// # Errors
    /// Returns `ConstraintError` if the word is malformed or the pattern is not exactly
    /// five `G`/`Y`/`X` symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::GuessConstraint;
    ///
    /// let c = GuessConstraint::parse("crane", "XYGXX").unwrap();
    /// assert_eq!(c.to_string(), "CRANE=XYGXX");
    /// assert!(GuessConstraint::parse("crane", "XYGX").is_err());
    /// ```
    pub fn parse(word: &str, pattern: &str) -> Result<Self, ConstraintError> {
        Ok(Self::new(Word::new(word)?, pattern.parse()?))
    }

    /// Whether `candidate` would have produced exactly this feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        Pattern::calculate(&self.guess, candidate) == self.pattern
    }

    /// Whether this round was a win
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }
}

impl std::str::FromStr for GuessConstraint {
    type Err = ConstraintError;

    /// Parse the CLI form `WORD=PATTERN` (also accepts `WORD:PATTERN`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s
            .split_once(['=', ':'])
            .ok_or_else(|| ConstraintError::Malformed(s.to_string()))?;
        Self::parse(word.trim(), pattern.trim())
    }
}

impl fmt::Display for GuessConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.guess, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_constraint() {
        let c = GuessConstraint::parse("CRANE", "xygxx").unwrap();
        assert_eq!(c.guess.text(), "CRANE");
        assert_eq!(c.pattern.to_string(), "XYGXX");
    }

    #[test]
    fn parse_rejects_short_pattern() {
        assert_eq!(
            GuessConstraint::parse("CRANE", "GGGG"),
            Err(ConstraintError::Pattern(PatternError::InvalidLength(4)))
        );
    }

    #[test]
    fn parse_rejects_bad_word() {
        assert!(matches!(
            GuessConstraint::parse("CRANES", "GGGGG"),
            Err(ConstraintError::Word(WordError::InvalidLength(6)))
        ));
    }

    #[test]
    fn from_str_cli_form() {
        let c: GuessConstraint = "slate=XXGXG".parse().unwrap();
        assert_eq!(c.to_string(), "SLATE=XXGXG");

        let c2: GuessConstraint = "SLATE:XXGXG".parse().unwrap();
        assert_eq!(c, c2);

        assert!(matches!(
            "SLATE".parse::<GuessConstraint>(),
            Err(ConstraintError::Malformed(_))
        ));
    }

    #[test]
    fn observed_admits_its_target() {
        let target = Word::new("FLOOR").unwrap();
        let c = GuessConstraint::observed(Word::new("ROBOT").unwrap(), &target);
        assert!(c.admits(&target));
        assert!(!c.admits(&Word::new("ROBOT").unwrap()));
        assert!(!c.is_solved());
    }
}
