//! Guess selection policy
//!
//! Combines entropy and letter statistics over a bounded evaluation pool:
//!
//! 1. No remaining candidates is a contradiction; one remaining candidate is the answer.
//! 2. Without any feedback yet, the cached opening word is returned.
//! 3. Otherwise every word of the pool is scored and the best composite wins.

use super::config::{ConfigError, SolverConfig};
use super::entropy::calculate_entropy;
use super::statistics::{LetterStatistics, WordStatisticalScore};
use crate::core::{GuessConstraint, Word};
use crate::wordlists::WordStore;
use log::{debug, info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

/// Error type for guess selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// No word is consistent with the feedback history
    NoConsistentCandidates,
    /// The caller supplied no words to guess from
    EmptyEvaluationPool,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConsistentCandidates => {
                write!(f, "no candidate word is consistent with the feedback given")
            }
            Self::EmptyEvaluationPool => write!(f, "guess pool is empty"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// One scored word of the evaluation pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub entropy: f64,
    pub statistics: WordStatisticalScore,
    /// Entropy plus prime-suspect bonus plus the weighted statistical blend
    pub composite: f64,
}

impl ScoredGuess {
    /// Selection order: composite, then statistical total, both descending, then alphabetical
    fn selection_order(&self, other: &Self) -> Ordering {
        other
            .composite
            .total_cmp(&self.composite)
            .then_with(|| other.statistics.total.total_cmp(&self.statistics.total))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Picks the next guess
///
/// Holds only configuration and the resolved opening word, so one selector can serve any
/// number of concurrent sessions.
#[derive(Debug, Clone)]
pub struct GuessSelector {
    config: SolverConfig,
    opening: Word,
}

impl GuessSelector {
    /// Create a selector and resolve its opening word against `store`
    ///
    /// The opener is the first preference-list word present in the guess list. If none is,
    /// it is computed once with the general algorithm over the full answer set.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration does not validate.
    pub fn new(config: SolverConfig, store: &WordStore) -> Result<Self, ConfigError> {
        Self::for_lists(config, store.answers(), store.guesses())
    }

    /// Like [`GuessSelector::new`] for bare lists; answers count as guessable
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration does not validate, or
    /// `ConfigError::UnresolvedOpeningWord` if both lists are empty and no preference matches.
    pub fn for_lists(
        config: SolverConfig,
        answers: &[Word],
        guesses: &[Word],
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let preferred = config
            .opening_preferences()?
            .into_iter()
            .find(|word| guesses.contains(word) || answers.contains(word));

        let opening = match preferred {
            Some(word) => word,
            None => {
                warn!("none of the configured opening words is in the guess list");
                let start = Instant::now();
                let computed = rank_pool(&config, answers, guesses)
                    .first()
                    .map(|scored| scored.word)
                    .ok_or(ConfigError::UnresolvedOpeningWord)?;
                info!("computed opening word {computed} in {:?}", start.elapsed());
                computed
            }
        };

        Ok(Self { config, opening })
    }

    /// Selector with [`SolverConfig::default`]
    ///
    /// # Errors
    /// Only fails if no opening word can be resolved.
    pub fn with_defaults(store: &WordStore) -> Result<Self, ConfigError> {
        Self::new(SolverConfig::default(), store)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The cached opening word
    #[inline]
    #[must_use]
    pub const fn opening_word(&self) -> Word {
        self.opening
    }

    /// Choose the next guess
    ///
    /// `remaining` must already be filtered by `constraints`; the constraints themselves are
    /// only consulted to detect the opening move.
    ///
    /// # Errors
    /// Returns `SelectionError::NoConsistentCandidates` if `remaining` is empty, and
    /// `SelectionError::EmptyEvaluationPool` if the general path is reached with an empty
    /// `guess_pool`.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{GuessConstraint, Word};
    /// use wordle_advisor::solver::{GuessSelector, filter_words};
    /// use wordle_advisor::wordlists::WordStore;
    ///
    /// let store = WordStore::from_strs(
    ///     &["BATCH", "HATCH", "MATCH", "PATCH"],
    ///     &["BUMPH", "CRANE"],
    /// ).unwrap();
    /// let selector = GuessSelector::with_defaults(&store).unwrap();
    ///
    /// // No feedback yet: the opening word
    /// let opener = selector.get_best_guess(store.answers(), store.guesses(), &[]).unwrap();
    /// assert_eq!(opener, selector.opening_word());
    ///
    /// let target = Word::new("MATCH").unwrap();
    /// let history = [GuessConstraint::observed(Word::new("CRANE").unwrap(), &target)];
    /// let remaining = filter_words(store.answers(), &history);
    ///
    /// // BUMPH separates all four remaining words
    /// let next = selector.get_best_guess(&remaining, store.guesses(), &history).unwrap();
    /// assert_eq!(next.text(), "BUMPH");
    /// ```
    pub fn get_best_guess(
        &self,
        remaining: &[Word],
        guess_pool: &[Word],
        constraints: &[GuessConstraint],
    ) -> Result<Word, SelectionError> {
        match remaining {
            [] => Err(SelectionError::NoConsistentCandidates),
            [only] => Ok(*only),
            _ if constraints.is_empty() && self.config.opening_fast_path => Ok(self.opening),
            _ => self.select(remaining, guess_pool),
        }
    }

    /// General path: score the bounded pool and take the best
    ///
    /// # Errors
    /// Returns `SelectionError::NoConsistentCandidates` if `remaining` is empty and
    /// `SelectionError::EmptyEvaluationPool` if `guess_pool` is.
    pub fn select(&self, remaining: &[Word], guess_pool: &[Word]) -> Result<Word, SelectionError> {
        select_guess(&self.config, remaining, guess_pool)
    }

    /// Score the whole evaluation pool, best first
    #[must_use]
    pub fn evaluate(&self, remaining: &[Word], guess_pool: &[Word]) -> Vec<ScoredGuess> {
        rank_pool(&self.config, remaining, guess_pool)
    }

    /// The bounded evaluation pool for `remaining`
    #[must_use]
    pub fn build_pool(&self, remaining: &[Word], guess_pool: &[Word]) -> Vec<Word> {
        let stats = LetterStatistics::from_words(remaining);
        build_pool(&self.config, &stats, remaining, guess_pool)
    }
}

/// Score the bounded pool for `remaining` and return the best word
///
/// This is the general path on its own: no opening word is resolved or consulted, so callers
/// that already have feedback can skip building a [`GuessSelector`].
///
/// # Errors
/// Returns `SelectionError::NoConsistentCandidates` if `remaining` is empty and
/// `SelectionError::EmptyEvaluationPool` if `guess_pool` is.
pub fn select_guess(
    config: &SolverConfig,
    remaining: &[Word],
    guess_pool: &[Word],
) -> Result<Word, SelectionError> {
    if remaining.is_empty() {
        return Err(SelectionError::NoConsistentCandidates);
    }
    if guess_pool.is_empty() {
        return Err(SelectionError::EmptyEvaluationPool);
    }

    let start = Instant::now();
    let scored = score_pool(config, remaining, guess_pool);

    let best = scored
        .iter()
        .min_by(|a, b| a.selection_order(b))
        .ok_or(SelectionError::EmptyEvaluationPool)?;

    debug!(
        "best of {} pool words against {} candidates: {} (composite {:.4}, entropy {:.4}) in {:?}",
        scored.len(),
        remaining.len(),
        best.word,
        best.composite,
        best.entropy,
        start.elapsed()
    );

    Ok(best.word)
}

fn rank_pool(config: &SolverConfig, remaining: &[Word], guess_pool: &[Word]) -> Vec<ScoredGuess> {
    let mut scored = score_pool(config, remaining, guess_pool);
    scored.sort_by(ScoredGuess::selection_order);
    scored
}

/// Score every pool word, in pool order
fn score_pool(config: &SolverConfig, remaining: &[Word], guess_pool: &[Word]) -> Vec<ScoredGuess> {
    if remaining.is_empty() {
        return Vec::new();
    }

    let stats = LetterStatistics::from_words(remaining);
    let pool = build_pool(config, &stats, remaining, guess_pool);
    let suspects: FxHashSet<Word> = remaining.iter().copied().collect();

    pool.par_iter()
        .map(|&word| {
            let entropy = calculate_entropy(&word, remaining);
            let statistics = stats.score(&word, suspects.contains(&word), config);
            ScoredGuess {
                word,
                entropy,
                statistics,
                composite: entropy + statistics.bonus + config.statistical_weight * statistics.blend(),
            }
        })
        .collect()
}

/// Prime suspects first, then the rest of the guess pool, each by descending letter value
///
/// Truncated to `config.candidate_cap` words with no duplicates.
fn build_pool(
    config: &SolverConfig,
    stats: &LetterStatistics,
    remaining: &[Word],
    guess_pool: &[Word],
) -> Vec<Word> {
    let cap = config.candidate_cap;
    let mut pool = by_letter_value(stats, remaining.iter().copied());
    pool.truncate(cap);

    if pool.len() < cap {
        let mut seen: FxHashSet<Word> = remaining.iter().copied().collect();
        let extras = guess_pool.iter().copied().filter(|w| seen.insert(*w));
        let room = cap - pool.len();
        pool.extend(by_letter_value(stats, extras).into_iter().take(room));
    }

    pool
}

fn by_letter_value(stats: &LetterStatistics, words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut valued: Vec<(f64, Word)> = words.map(|w| (stats.letter_value(&w), w)).collect();
    valued.sort_by(|(va, wa), (vb, wb)| vb.total_cmp(va).then_with(|| wa.cmp(wb)));
    valued.into_iter().map(|(_, w)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn store(answers: &[&str], guesses: &[&str]) -> WordStore {
        WordStore::from_strs(answers, guesses).unwrap()
    }

    fn some_history() -> Vec<GuessConstraint> {
        vec![GuessConstraint::parse("QUIRK", "XXXXX").unwrap()]
    }

    #[test]
    fn empty_remaining_is_contradiction() {
        let store = store(&["CRANE", "SLATE"], &[]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        assert_eq!(
            selector.get_best_guess(&[], store.guesses(), &some_history()),
            Err(SelectionError::NoConsistentCandidates)
        );
    }

    #[test]
    fn single_remaining_is_returned() {
        let store = store(&["CRANE", "SLATE"], &[]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        let remaining = words(&["SLATE"]);

        // even before any feedback
        assert_eq!(selector.get_best_guess(&remaining, store.guesses(), &[]), Ok(word("SLATE")));
        assert_eq!(
            selector.get_best_guess(&remaining, store.guesses(), &some_history()),
            Ok(word("SLATE"))
        );
    }

    #[test]
    fn opening_word_comes_from_preference_list() {
        let store = store(&["CRANE", "SLATE", "IRATE"], &["TARES"]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        assert_eq!(selector.opening_word(), word("TARES"));

        // TARES missing: next preference present in the guess list
        let store = self::store(&["CRANE", "SLATE", "IRATE"], &[]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        assert_eq!(selector.opening_word(), word("SLATE"));
    }

    #[test]
    fn opening_word_computed_when_no_preference_present() {
        let store = store(&["BATCH", "HATCH", "MATCH", "PATCH"], &["BUMPH"]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        assert_eq!(selector.opening_word(), word("BUMPH"));

        for _ in 0..3 {
            assert_eq!(
                selector.get_best_guess(store.answers(), store.guesses(), &[]),
                Ok(word("BUMPH"))
            );
        }
    }

    #[test]
    fn fast_path_can_be_disabled() {
        let store = store(&["BATCH", "HATCH", "MATCH", "PATCH"], &["BUMPH", "SLATE"]);
        let config = SolverConfig::default().with_opening_fast_path(false);
        let selector = GuessSelector::new(config, &store).unwrap();

        assert_eq!(selector.opening_word(), word("SLATE"));
        assert_eq!(
            selector.get_best_guess(store.answers(), store.guesses(), &[]),
            Ok(word("BUMPH"))
        );
    }

    #[test]
    fn picks_most_informative_word() {
        let store = store(&["BATCH", "HATCH", "MATCH", "PATCH"], &["BUMPH", "CRANE"]);
        let selector = GuessSelector::with_defaults(&store).unwrap();

        let best = selector.get_best_guess(store.answers(), store.guesses(), &some_history());
        assert_eq!(best, Ok(word("BUMPH")));
    }

    #[test]
    fn prime_suspect_bonus_wins_entropy_ties() {
        // Every pool word splits {HATCH, MATCH} perfectly (1 bit); the suspects get +0.1
        let store = store(&["HATCH", "MATCH"], &["CHUMP"]);
        let selector = GuessSelector::with_defaults(&store).unwrap();

        let scored = selector.evaluate(store.answers(), store.guesses());
        assert_eq!(scored.len(), 3);
        assert!(scored[0].statistics.prime_suspect);
        assert!(scored[1].statistics.prime_suspect);
        assert_eq!(scored[2].word, word("CHUMP"));

        // equal composites: MATCH has the higher statistical total
        let best = selector.get_best_guess(store.answers(), store.guesses(), &some_history());
        assert_eq!(best, Ok(word("MATCH")));
    }

    #[test]
    fn general_path_ignores_opening_preferences() {
        let remaining = words(&["BATCH", "HATCH", "MATCH", "PATCH"]);
        let pool = words(&["BATCH", "HATCH", "MATCH", "PATCH", "BUMPH"]);

        // An opener that could never be resolved does not matter once feedback exists
        let config = SolverConfig::default().with_opening_words(["CR4NE"]);
        assert!(GuessSelector::for_lists(config.clone(), &remaining, &pool).is_err());
        assert_eq!(select_guess(&config, &remaining, &pool), Ok(word("BUMPH")));
        assert_eq!(
            select_guess(&config, &[], &pool),
            Err(SelectionError::NoConsistentCandidates)
        );
    }

    #[test]
    fn empty_guess_pool_is_an_error() {
        let store = store(&["BATCH", "HATCH", "MATCH"], &[]);
        let selector = GuessSelector::with_defaults(&store).unwrap();
        assert_eq!(
            selector.get_best_guess(store.answers(), &[], &some_history()),
            Err(SelectionError::EmptyEvaluationPool)
        );
    }

    #[test]
    fn full_ties_fall_back_to_alphabetical_order() {
        let store = store(&["SLATE", "PLATE"], &[]);
        let selector = GuessSelector::with_defaults(&store).unwrap();

        let best = selector.get_best_guess(store.answers(), store.guesses(), &some_history());
        assert_eq!(best, Ok(word("PLATE")));
    }

    #[test]
    fn pool_is_capped_and_suspects_come_first() {
        let answers = ["BATCH", "HATCH", "MATCH", "PATCH", "LATCH"];
        let guesses = ["BUMPH", "CRANE", "SLATE", "QUIRK", "PLUMB"];
        let store = store(&answers, &guesses);

        let config = SolverConfig::default().with_candidate_cap(3);
        let selector = GuessSelector::new(config, &store).unwrap();
        let pool = selector.build_pool(store.answers(), store.guesses());
        assert_eq!(pool.len(), 3);
        assert!(pool.iter().all(|w| store.is_answer(w)));

        let config = SolverConfig::default().with_candidate_cap(8);
        let selector = GuessSelector::new(config, &store).unwrap();
        let remaining = words(&["HATCH", "MATCH"]);
        let pool = selector.build_pool(&remaining, store.guesses());
        assert_eq!(pool.len(), 8);
        assert!(remaining.contains(&pool[0]) && remaining.contains(&pool[1]));

        let unique: FxHashSet<Word> = pool.iter().copied().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let answers = ["BATCH", "HATCH", "MATCH", "PATCH", "LATCH", "CATCH", "WATCH"];
        let store = store(&answers, &["BUMPH", "CLAMP", "WHELP"]);
        let selector = GuessSelector::with_defaults(&store).unwrap();

        let first = selector.evaluate(store.answers(), store.guesses());
        for _ in 0..5 {
            assert_eq!(selector.evaluate(store.answers(), store.guesses()), first);
        }
        assert!(
            first
                .windows(2)
                .all(|w| w[0].selection_order(&w[1]) != Ordering::Greater)
        );
    }
}
