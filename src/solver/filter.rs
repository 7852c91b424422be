//! Constraint filtering
//!
//! Keeps the candidates that would have produced every observed feedback pattern.

use crate::core::{GuessConstraint, Word};
use log::trace;

/// Filter candidates to those consistent with all constraints
///
/// A candidate survives only if simulating each constraint's guess against it reproduces
/// that constraint's pattern exactly. Input order is preserved. With no constraints the
/// input is returned unchanged; an empty result means the history is contradictory.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{GuessConstraint, Word};
/// use wordle_advisor::solver::filter_words;
///
/// let candidates: Vec<Word> = ["IRATE", "CRATE", "GRATE"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = [GuessConstraint::parse("CRANE", "GGGXG").unwrap()];
///
/// let remaining = filter_words(&candidates, &history);
/// assert_eq!(remaining, [Word::new("CRATE").unwrap()]);
/// ```
#[must_use]
pub fn filter_words(candidates: &[Word], constraints: &[GuessConstraint]) -> Vec<Word> {
    let remaining: Vec<Word> = candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, constraints))
        .copied()
        .collect();

    trace!(
        "filtered {} -> {} candidates with {} constraints",
        candidates.len(),
        remaining.len(),
        constraints.len()
    );

    remaining
}

/// Whether `candidate` agrees with every constraint
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, constraints: &[GuessConstraint]) -> bool {
    constraints.iter().all(|constraint| constraint.admits(candidate))
}
