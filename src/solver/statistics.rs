//! Letter-frequency and positional scoring
//!
//! Complements entropy with cheap statistics over the remaining candidates. Used for
//! tie-breaking, the deterministic pool fill order, and as a standalone diagnostic.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use crate::solver::config::SolverConfig;

/// Letter counts over a candidate set
#[derive(Debug, Clone)]
pub struct LetterStatistics {
    /// Total occurrences of each letter, duplicates included
    occurrences: [usize; ALPHABET_SIZE],
    /// Number of words containing each letter at least once
    containing: [usize; ALPHABET_SIZE],
    /// Number of words with each letter at each position
    positional: [[usize; ALPHABET_SIZE]; WORD_LENGTH],
    total: usize,
}

/// Statistical score of one word against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStatisticalScore {
    /// Share of all remaining letter occurrences covered by the word's unique letters, in [0, 1]
    pub letter_frequency: f64,
    /// Mean probability that a remaining word matches the word letter-for-letter, in [0, 1]
    pub position_probability: f64,
    /// Whether the word is itself a remaining candidate
    pub prime_suspect: bool,
    /// Bonus applied for being a prime suspect
    pub bonus: f64,
    /// Weighted blend of the two components plus the bonus
    pub total: f64,
}

impl WordStatisticalScore {
    /// The blend without the prime-suspect bonus
    #[inline]
    #[must_use]
    pub fn blend(&self) -> f64 {
        self.total - self.bonus
    }
}

impl LetterStatistics {
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut stats = Self {
            occurrences: [0; ALPHABET_SIZE],
            containing: [0; ALPHABET_SIZE],
            positional: [[0; ALPHABET_SIZE]; WORD_LENGTH],
            total: words.len(),
        };

        for word in words {
            let mut seen = 0u32;
            for (pos, &letter) in word.letters().iter().enumerate() {
                let idx = letter_index(letter);
                stats.occurrences[idx] += 1;
                stats.positional[pos][idx] += 1;
                if seen & (1 << idx) == 0 {
                    seen |= 1 << idx;
                    stats.containing[idx] += 1;
                }
            }
        }

        stats
    }

    /// Fraction of words containing `letter`, in either case; 0 for anything but a letter
    #[must_use]
    pub fn presence(&self, letter: u8) -> f64 {
        if letter.is_ascii_alphabetic() {
            self.containing_fraction(letter_index(letter.to_ascii_uppercase()))
        } else {
            0.0
        }
    }

    fn containing_fraction(&self, idx: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.containing[idx] as f64 / self.total as f64
    }

    /// Normalized sum of occurrence counts over the unique letters of `word`
    #[must_use]
    pub fn letter_frequency(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let covered: usize = unique_letters(word)
            .map(|idx| self.occurrences[idx])
            .sum();
        covered as f64 / (self.total * WORD_LENGTH) as f64
    }

    /// Mean over positions of P(remaining word has `word[i]` at position i)
    #[must_use]
    pub fn position_probability(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let matches: usize = word
            .letters()
            .iter()
            .enumerate()
            .map(|(pos, &letter)| self.positional[pos][letter_index(letter)])
            .sum();
        matches as f64 / (self.total * WORD_LENGTH) as f64
    }

    /// Letter value used to order the evaluation pool
    ///
    /// Σ p·(1−p) over the word's unique letters, where p is the fraction of words containing
    /// the letter. Letters every word has (or none has) are worth nothing; letters that split
    /// the set in half are worth most.
    #[must_use]
    pub fn letter_value(&self, word: &Word) -> f64 {
        unique_letters(word)
            .map(|idx| {
                let p = self.containing_fraction(idx);
                p * (1.0 - p)
            })
            .sum()
    }

    /// Score `word` with the weights of `config`
    #[must_use]
    pub fn score(&self, word: &Word, prime_suspect: bool, config: &SolverConfig) -> WordStatisticalScore {
        let letter_frequency = self.letter_frequency(word);
        let position_probability = self.position_probability(word);
        let bonus = if prime_suspect {
            config.prime_suspect_bonus
        } else {
            0.0
        };

        WordStatisticalScore {
            letter_frequency,
            position_probability,
            prime_suspect,
            bonus,
            total: config.letter_frequency_weight * letter_frequency
                + config.position_weight * position_probability
                + bonus,
        }
    }
}

/// Indices of the distinct letters of `word`, in first-occurrence order
fn unique_letters(word: &Word) -> impl Iterator<Item = usize> + '_ {
    let mut seen = 0u32;
    word.letters().iter().filter_map(move |&letter| {
        let idx = letter_index(letter);
        if seen & (1 << idx) == 0 {
            seen |= 1 << idx;
            Some(idx)
        } else {
            None
        }
    })
}

/// Score a single word against the remaining candidates with the default weights
///
/// The prime-suspect bonus (+0.1) applies when `word` is itself in `remaining_words`.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::calculate_statistical_score;
///
/// let remaining: Vec<Word> = ["CRANE", "CRATE", "GRATE"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let suspect = calculate_statistical_score(&remaining[1], &remaining);
/// assert!(suspect.prime_suspect);
///
/// let outsider = calculate_statistical_score(&Word::new("FJORD").unwrap(), &remaining);
/// assert!(!outsider.prime_suspect);
/// assert!(suspect.total > outsider.total);
/// ```
#[must_use]
pub fn calculate_statistical_score(word: &Word, remaining_words: &[Word]) -> WordStatisticalScore {
    let stats = LetterStatistics::from_words(remaining_words);
    stats.score(word, remaining_words.contains(word), &SolverConfig::default())
}
