//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word, or no copies left)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. The exchange format with calling
//! layers is a 5-character string over `G`, `Y`, `X`.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Gray,
    Yellow,
    Green,
}

impl LetterFeedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Gray,
        }
    }

    /// The `G`/`Y`/`X` symbol used in the string exchange format
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => 'X',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/`Y`/`X` in either case, plus `-`/`_` and the square emoji for convenience.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

/// Error type for malformed pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "pattern must have exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "invalid pattern symbol {ch:?}, expected G, Y or X")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All grays
    pub const ALL_GRAY: Self = Self(0);

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [LetterFeedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for state in feedback {
            pattern += state.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw value widened for bucket indexing
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [LetterFeedback; WORD_LENGTH] {
        let mut val = self.0;
        std::array::from_fn(|_| {
            let state = LetterFeedback::from_digit(val % 3);
            val /= 3;
            state
        })
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the hidden word
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens); every unmatched target letter goes into
    ///    the available pool
    /// 2. Second pass: a non-green guess letter is yellow only while the pool still holds a
    ///    copy of it, and consumes that copy
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("ABCDE").unwrap();
    /// let target = Word::new("EDCBA").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "YYGYY");
    ///
    /// let speed = Word::new("SPEED").unwrap();
    /// let abide = Word::new("ABIDE").unwrap();
    /// // Only one E in ABIDE, so only the first E is yellow
    /// assert_eq!(Pattern::calculate(&speed, &abide).to_string(), "XXYXY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut feedback = [LetterFeedback::Gray; WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        // First pass: greens, everything else feeds the pool
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = LetterFeedback::Green;
            } else {
                available[letter_index(target[i])] += 1;
            }
        }

        // Second pass: yellows limited by what the pool still holds
        for i in 0..WORD_LENGTH {
            if feedback[i] == LetterFeedback::Green {
                continue;
            }
            let slot = &mut available[letter_index(guess[i])];
            if *slot > 0 {
                feedback[i] = LetterFeedback::Yellow;
                *slot -= 1;
            }
        }

        Self::from_feedback(feedback)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|state| match state {
                LetterFeedback::Green => '🟩',
                LetterFeedback::Yellow => '🟨',
                LetterFeedback::Gray => '⬜',
            })
            .collect()
    }
}

/// Compute the pattern for a (guess, target) pair
///
/// Free-function form of [`Pattern::calculate`].
#[inline]
#[must_use]
pub fn simulate_guess_pattern(guess: &Word, target: &Word) -> Pattern {
    Pattern::calculate(guess, target)
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern string like "GYXXG"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(symbols.len()));
        }

        let mut feedback = [LetterFeedback::Gray; WORD_LENGTH];
        for (slot, &symbol) in feedback.iter_mut().zip(&symbols) {
            *slot = LetterFeedback::from_symbol(symbol).ok_or(PatternError::InvalidSymbol(symbol))?;
        }

        Ok(Self::from_feedback(feedback))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.feedback() {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}
