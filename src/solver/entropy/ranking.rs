//! Entropy ranking of a guess pool
//!
//! Diagnostic view: every pool word with its entropy and partition metadata.

use super::calculator::calculate_metrics;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A word ranked by the information it reveals about the remaining candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordEntropyRanking {
    pub word: Word,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Size of the candidate set the word was ranked against
    pub remaining_count: usize,
    /// Distinct feedback patterns induced
    pub pattern_count: usize,
    /// Expected number of candidates eliminated
    pub average_elimination: f64,
    /// Worst-case bucket size
    pub max_partition: usize,
    /// Whether the word is itself a remaining candidate
    pub is_prime_suspect: bool,
}

impl WordEntropyRanking {
    /// Rank one word against the remaining candidates
    #[must_use]
    pub fn new(word: Word, remaining: &[Word], is_prime_suspect: bool) -> Self {
        let metrics = calculate_metrics(&word, remaining);
        Self {
            word,
            entropy: metrics.entropy,
            remaining_count: remaining.len(),
            pattern_count: metrics.pattern_count,
            average_elimination: metrics.average_elimination,
            max_partition: metrics.max_partition,
            is_prime_suspect,
        }
    }
}

/// Rank every pool word by entropy against `remaining`
///
/// Sorted by entropy, highest first; equal entropies fall back to alphabetical order.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::rank_words;
///
/// let pool = [Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let remaining: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let rankings = rank_words(&pool, &remaining);
/// assert_eq!(rankings[0].word.text(), "AEROS");
/// assert!(!rankings[0].is_prime_suspect);
/// ```
#[must_use]
pub fn rank_words(pool: &[Word], remaining: &[Word]) -> Vec<WordEntropyRanking> {
    let suspects: FxHashSet<Word> = remaining.iter().copied().collect();

    let mut rankings: Vec<WordEntropyRanking> = pool
        .par_iter()
        .map(|&word| WordEntropyRanking::new(word, remaining, suspects.contains(&word)))
        .collect();

    rankings.sort_by(|a, b| b.entropy.total_cmp(&a.entropy).then_with(|| a.word.cmp(&b.word)));
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn ranks_highest_entropy_first() {
        let pool = words(&["aaaaa", "aeros", "crane"]);
        let remaining = words(&["slate", "irate", "crate", "grate"]);

        let rankings = rank_words(&pool, &remaining);
        assert_eq!(rankings.len(), 3);
        assert!(rankings.windows(2).all(|w| w[0].entropy >= w[1].entropy));
        assert_eq!(rankings.last().unwrap().word.text(), "AAAAA");
    }

    #[test]
    fn equal_entropy_sorted_alphabetically() {
        // None of these letters appear in the candidates: all 0 bits
        let pool = words(&["ZZZZZ", "QQQQQ", "JJJJJ"]);
        let remaining = words(&["slate", "irate"]);

        let rankings = rank_words(&pool, &remaining);
        let order: Vec<&str> = rankings.iter().map(|r| r.word.text()).collect();
        assert_eq!(order, ["JJJJJ", "QQQQQ", "ZZZZZ"]);
    }

    #[test]
    fn flags_prime_suspects() {
        let pool = words(&["crate", "aeros"]);
        let remaining = words(&["slate", "crate"]);

        let rankings = rank_words(&pool, &remaining);
        let crate_rank = rankings.iter().find(|r| r.word.text() == "CRATE").unwrap();
        assert!(crate_rank.is_prime_suspect);
        assert_eq!(crate_rank.remaining_count, 2);
        assert_eq!(crate_rank.pattern_count, 2);
        assert!((crate_rank.average_elimination - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_pool_gives_empty_ranking() {
        assert!(rank_words(&[], &words(&["slate"])).is_empty());
    }
}
