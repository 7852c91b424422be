//! Tunable parameters of the guess selector

use crate::core::{Word, WordError};
use std::fmt;

/// Default maximum size of the evaluation pool
pub const DEFAULT_CANDIDATE_CAP: usize = 200;

/// Default additive bonus for guesses that could themselves be the answer
pub const DEFAULT_PRIME_SUSPECT_BONUS: f64 = 0.1;

/// Default opening-word preference list; the first one present in the guess list is used
pub const DEFAULT_OPENING_WORDS: [&str; 5] = ["TARES", "SLATE", "CRANE", "CRATE", "SLANT"];

/// Default attempt budget of a game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Selector and session configuration
///
/// The composite score of a pool word is
///
/// ```text
/// entropy + prime_suspect_bonus·[is remaining candidate]
///         + statistical_weight·(letter_frequency_weight·lf + position_weight·pp)
/// ```
///
/// With the default `statistical_weight` of 0 the statistical blend only breaks ties.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of words scored per recommendation (default: 200)
    pub candidate_cap: usize,

    /// Bonus for words still in the candidate set (default: 0.1)
    pub prime_suspect_bonus: f64,

    /// Weight of the statistical blend in the composite (default: 0.0)
    pub statistical_weight: f64,

    /// Letter-frequency share of the statistical blend (default: 0.6)
    pub letter_frequency_weight: f64,

    /// Position-probability share of the statistical blend (default: 0.4)
    pub position_weight: f64,

    /// Return the cached opening word when no constraints exist yet (default: true)
    pub opening_fast_path: bool,

    /// Opening-word preference list
    pub opening_words: Vec<String>,

    /// Attempts per game before a session counts as failed (default: 6)
    pub max_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            candidate_cap: DEFAULT_CANDIDATE_CAP,
            prime_suspect_bonus: DEFAULT_PRIME_SUSPECT_BONUS,
            statistical_weight: 0.0,
            letter_frequency_weight: 0.6,
            position_weight: 0.4,
            opening_fast_path: true,
            opening_words: DEFAULT_OPENING_WORDS.iter().map(|&w| w.to_string()).collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroCandidateCap,
    ZeroMaxAttempts,
    InvalidWeight { name: &'static str, value: f64 },
    InvalidOpeningWord { word: String, source: WordError },
    UnresolvedOpeningWord,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCandidateCap => write!(f, "candidate cap must be at least 1"),
            Self::ZeroMaxAttempts => write!(f, "max attempts must be at least 1"),
            Self::InvalidWeight { name, value } => {
                write!(f, "{name} must be a finite, non-negative number, got {value}")
            }
            Self::InvalidOpeningWord { word, source } => {
                write!(f, "opening word {word:?}: {source}")
            }
            Self::UnresolvedOpeningWord => write!(f, "no opening word could be resolved"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOpeningWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_candidate_cap(mut self, cap: usize) -> Self {
        self.candidate_cap = cap;
        self
    }

    #[must_use]
    pub const fn with_prime_suspect_bonus(mut self, bonus: f64) -> Self {
        self.prime_suspect_bonus = bonus;
        self
    }

    #[must_use]
    pub const fn with_statistical_weight(mut self, weight: f64) -> Self {
        self.statistical_weight = weight;
        self
    }

    #[must_use]
    pub const fn with_opening_fast_path(mut self, enabled: bool) -> Self {
        self.opening_fast_path = enabled;
        self
    }

    #[must_use]
    pub fn with_opening_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opening_words = words.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check every parameter
    ///
    /// # Errors
    /// Returns the first problem found: a zero cap or attempt budget, a negative or
    /// non-finite weight, or a malformed opening word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidate_cap == 0 {
            return Err(ConfigError::ZeroCandidateCap);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }

        let weights = [
            ("prime_suspect_bonus", self.prime_suspect_bonus),
            ("statistical_weight", self.statistical_weight),
            ("letter_frequency_weight", self.letter_frequency_weight),
            ("position_weight", self.position_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        self.opening_preferences().map(|_| ())
    }

    /// Parsed opening-word preference list
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpeningWord` for the first malformed entry.
    pub fn opening_preferences(&self) -> Result<Vec<Word>, ConfigError> {
        self.opening_words
            .iter()
            .map(|w| {
                Word::new(w).map_err(|source| ConfigError::InvalidOpeningWord {
                    word: w.clone(),
                    source,
                })
            })
            .collect()
    }
}
