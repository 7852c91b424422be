//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Number of distinct feedback patterns the guess can produce
    pub pattern_count: usize,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Expected number of candidates eliminated by this guess
    pub average_elimination: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, in `[0, log₂ min(n, 243)]`.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_counts(guess, candidates))
}

/// Count how many candidates fall into each of the 243 pattern buckets
#[must_use]
pub fn pattern_counts(guess: &Word, candidates: &[Word]) -> [usize; PATTERN_COUNT] {
    let mut counts = [0usize; PATTERN_COUNT];
    for candidate in candidates {
        counts[Pattern::calculate(guess, candidate).index()] += 1;
    }
    counts
}

/// Group candidates by the pattern they produce with the guess
///
/// Slower than [`pattern_counts`]; used where the members of each group are shown.
#[must_use]
pub fn partition_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, Vec<Word>> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(*candidate);
    }
    groups
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p), zero-count buckets contribute nothing.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// All metrics come from one pass over the candidates.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            pattern_count: 0,
            expected_remaining: 0.0,
            average_elimination: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_counts(guess, candidates);
    let total = candidates.len() as f64;

    let mut pattern_count = 0;
    let mut max_partition = 0;
    let mut expected_remaining = 0.0;
    for &count in counts.iter().filter(|&&c| c > 0) {
        pattern_count += 1;
        max_partition = max_partition.max(count);
        expected_remaining += (count * count) as f64 / total;
    }

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        pattern_count,
        expected_remaining,
        average_elimination: total - expected_remaining,
        max_partition,
    }
}
