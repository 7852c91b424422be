//! Word analysis command
//!
//! Reports how much a word would reveal as an opening guess against the answer list.

use crate::core::{Pattern, Word};
use crate::solver::entropy::{WordEntropyRanking, calculate_metrics, partition_by_pattern};
use crate::solver::{WordStatisticalScore, calculate_statistical_score};
use crate::wordlists::WordStore;

/// How many of the largest pattern groups to report
const TOP_GROUPS: usize = 5;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub ranking: WordEntropyRanking,
    pub statistics: WordStatisticalScore,
    pub expected_remaining: f64,
    /// Largest pattern groups, biggest first
    pub largest_groups: Vec<(Pattern, usize)>,
}

/// Analyze a word against every answer
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the guess list
pub fn analyze_word(word: &str, store: &WordStore) -> Result<AnalysisResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !store.is_valid_guess(&word) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let answers = store.answers();
    let ranking = WordEntropyRanking::new(word, answers, store.is_answer(&word));
    let statistics = calculate_statistical_score(&word, answers);
    let metrics = calculate_metrics(&word, answers);

    let mut largest_groups: Vec<(Pattern, usize)> = partition_by_pattern(&word, answers)
        .into_iter()
        .map(|(pattern, members)| (pattern, members.len()))
        .collect();
    largest_groups.sort_by(|(pa, a), (pb, b)| b.cmp(a).then_with(|| pa.cmp(pb)));
    largest_groups.truncate(TOP_GROUPS);

    Ok(AnalysisResult {
        ranking,
        statistics,
        expected_remaining: metrics.expected_remaining,
        largest_groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        WordStore::from_strs(
            &["BATCH", "HATCH", "MATCH", "PATCH", "CRANE", "SLATE"],
            &["BUMPH", "QUIRK"],
        )
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("crane", &store()).unwrap();

        assert_eq!(result.ranking.word.text(), "CRANE");
        assert!(result.ranking.entropy > 0.0);
        assert!(result.ranking.is_prime_suspect);
        assert!(result.statistics.prime_suspect);
        assert_eq!(result.ranking.remaining_count, 6);
    }

    #[test]
    fn analyze_word_not_in_list() {
        assert!(analyze_word("zzzzz", &store()).is_err());
        assert!(analyze_word("cr4ne", &store()).is_err());
    }

    #[test]
    fn groups_are_largest_first() {
        let result = analyze_word("quirk", &store()).unwrap();

        // QUIRK shares no letter with BATCH/HATCH/MATCH/PATCH/SLATE
        assert_eq!(result.largest_groups[0], (Pattern::ALL_GRAY, 5));
        assert!(result.largest_groups.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(!result.ranking.is_prime_suspect);
    }

    #[test]
    fn entropy_properties() {
        let store = store();
        let result = analyze_word("bumph", &store).unwrap();

        assert!(result.ranking.entropy >= 0.0);
        assert!(result.ranking.entropy <= (store.answers().len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= store.answers().len() as f64);
    }
}
