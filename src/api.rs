//! String-level entry points
//!
//! Plain `&str` words and G/Y/X pattern strings in, owned strings out, for callers that do
//! not want to handle the typed API. Every input is validated before any computation runs.

use crate::core::{ConstraintError, GuessConstraint, Pattern, Word, WordError};
use crate::solver::{self, ConfigError, GuessSelector, SelectionError, SolverConfig};
use std::fmt;

/// Error type for the string-level API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A word argument failed validation
    Word { input: String, source: WordError },
    /// A (word, pattern) pair failed validation
    Constraint(ConstraintError),
    Config(ConfigError),
    Selection(SelectionError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word { input, source } => write!(f, "{input:?}: {source}"),
            Self::Constraint(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Selection(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word { source, .. } => Some(source),
            Self::Constraint(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Selection(e) => Some(e),
        }
    }
}

impl From<ConstraintError> for ApiError {
    fn from(e: ConstraintError) -> Self {
        Self::Constraint(e)
    }
}

/// Statistical score with the field names of the external contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalScore {
    pub total: f64,
    pub letter_freq: f64,
    pub position_prob: f64,
    pub prime_suspect: bool,
}

fn word(input: &str) -> Result<Word, ApiError> {
    Word::new(input).map_err(|source| ApiError::Word {
        input: input.to_string(),
        source,
    })
}

fn words<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Word>, ApiError> {
    inputs.iter().map(|s| word(s.as_ref())).collect()
}

fn constraints<W: AsRef<str>, P: AsRef<str>>(
    pairs: &[(W, P)],
) -> Result<Vec<GuessConstraint>, ApiError> {
    pairs
        .iter()
        .map(|(w, p)| GuessConstraint::parse(w.as_ref(), p.as_ref()).map_err(ApiError::from))
        .collect()
}

fn texts(words: &[Word]) -> Vec<String> {
    words.iter().map(|w| w.text().to_string()).collect()
}

/// Feedback for `guess` against `target` as a G/Y/X string
///
/// # Errors
/// Returns `ApiError::Word` if either word is malformed.
///
/// # Examples
/// ```
/// use wordle_advisor::api::simulate_guess_pattern;
///
/// assert_eq!(simulate_guess_pattern("crane", "slate").unwrap(), "XXGXG");
/// assert_eq!(simulate_guess_pattern("speed", "erase").unwrap(), "YXYYX");
/// assert!(simulate_guess_pattern("cranes", "slate").is_err());
/// ```
pub fn simulate_guess_pattern(guess: &str, target: &str) -> Result<String, ApiError> {
    Ok(Pattern::calculate(&word(guess)?, &word(target)?).to_string())
}

/// Candidates consistent with every (word, pattern) pair, uppercased, in input order
///
/// # Errors
/// Returns an error for a malformed candidate, guess or pattern; nothing is filtered then.
pub fn filter_words<S, W, P>(candidates: &[S], constraints_so_far: &[(W, P)]) -> Result<Vec<String>, ApiError>
where
    S: AsRef<str>,
    W: AsRef<str>,
    P: AsRef<str>,
{
    let candidates = words(candidates)?;
    let constraints = constraints(constraints_so_far)?;
    Ok(texts(&solver::filter_words(&candidates, &constraints)))
}

/// Entropy in bits of `candidate_guess` over `remaining_words`
///
/// # Errors
/// Returns `ApiError::Word` for any malformed word.
pub fn calculate_entropy<S: AsRef<str>>(candidate_guess: &str, remaining_words: &[S]) -> Result<f64, ApiError> {
    Ok(solver::calculate_entropy(&word(candidate_guess)?, &words(remaining_words)?))
}

/// Statistical score of `word` over `remaining_words` with the default weights
///
/// # Errors
/// Returns `ApiError::Word` for any malformed word.
pub fn calculate_statistical_score<S: AsRef<str>>(
    candidate: &str,
    remaining_words: &[S],
) -> Result<StatisticalScore, ApiError> {
    let score = solver::calculate_statistical_score(&word(candidate)?, &words(remaining_words)?);
    Ok(StatisticalScore {
        total: score.total,
        letter_freq: score.letter_frequency,
        position_prob: score.position_probability,
        prime_suspect: score.prime_suspect,
    })
}

/// Best next guess with the default configuration, or `None` when no candidate remains
///
/// Without constraints the opening word is returned: the first default preference present in
/// `guess_pool` or `remaining_words`, or, when none is, the word computed from both lists.
/// With constraints the opening word is never resolved and the bounded pool is scored directly.
///
/// # Errors
/// Returns an error for malformed input or an empty `guess_pool`.
///
/// # Examples
/// ```
/// use wordle_advisor::api::get_best_guess;
///
/// let remaining = ["BATCH", "HATCH", "MATCH", "PATCH"];
/// let pool = ["BATCH", "HATCH", "MATCH", "PATCH", "BUMPH"];
///
/// let best = get_best_guess(&remaining, &pool, &[("CRANE", "YXYXX")]).unwrap();
/// assert_eq!(best.as_deref(), Some("BUMPH"));
///
/// let contradiction = get_best_guess(&[] as &[&str], &pool, &[("CRANE", "YXYXX")]).unwrap();
/// assert_eq!(contradiction, None);
/// ```
pub fn get_best_guess<S, G, W, P>(
    remaining_words: &[S],
    guess_pool: &[G],
    constraints_so_far: &[(W, P)],
) -> Result<Option<String>, ApiError>
where
    S: AsRef<str>,
    G: AsRef<str>,
    W: AsRef<str>,
    P: AsRef<str>,
{
    let remaining = words(remaining_words)?;
    let pool = words(guess_pool)?;
    let constraints = constraints(constraints_so_far)?;

    match remaining.as_slice() {
        [] => return Ok(None),
        [only] => return Ok(Some(only.text().to_string())),
        _ => {}
    }

    let config = SolverConfig::default();
    let best = if constraints.is_empty() {
        GuessSelector::for_lists(config, &remaining, &pool)
            .map_err(ApiError::Config)?
            .get_best_guess(&remaining, &pool, &constraints)
    } else {
        config.validate().map_err(ApiError::Config)?;
        solver::select_guess(&config, &remaining, &pool)
    };

    match best {
        Ok(best) => Ok(Some(best.text().to_string())),
        Err(SelectionError::NoConsistentCandidates) => Ok(None),
        Err(e) => Err(ApiError::Selection(e)),
    }
}
