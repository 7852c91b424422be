//! Word solving command
//!
//! Plays one game against a known target and returns the solution path.

use crate::core::{GuessConstraint, Pattern, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{GameSession, GameStatus, GuessSelector, SessionError};
use crate::wordlists::WordStore;
use std::time::{Duration, Instant};

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub status: GameStatus,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Solved
    }

    /// Slowest recommendation of the game
    #[must_use]
    pub fn max_latency(&self) -> Duration {
        self.guesses
            .iter()
            .map(|step| step.elapsed)
            .max()
            .unwrap_or_default()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy and expected remaining, when more than one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
    /// Time spent choosing this guess
    pub elapsed: Duration,
}

/// Solve a target given as text; it must be in the answer list
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not a possible answer
/// - The solver cannot provide a guess
pub fn solve_word(
    target: &str,
    store: &WordStore,
    selector: &GuessSelector,
) -> Result<SolveResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    if !store.is_answer(&target) {
        return Err(format!("Word '{target}' is not in the answer list"));
    }

    play_game(target, store, selector).map_err(|e| e.to_string())
}

/// Play the selector's recommendations against `target` until solved or out of attempts
///
/// # Errors
///
/// Returns `SessionError::Selection` if the candidates run out, which only happens when
/// `target` is not in the answer list.
pub fn play_game(
    target: Word,
    store: &WordStore,
    selector: &GuessSelector,
) -> Result<SolveResult, SessionError> {
    let mut session = GameSession::new(store, selector);
    let mut guesses = Vec::new();

    while !session.status().is_over() {
        let candidates_before = session.candidates().len();

        let start = Instant::now();
        let guess = session.recommend()?;
        let elapsed = start.elapsed();

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, session.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let constraint = GuessConstraint::observed(guess, &target);
        session.record(constraint)?;

        guesses.push(GuessStep {
            word: guess,
            pattern: constraint.pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
            expected_remaining,
            elapsed,
        });
    }

    Ok(SolveResult {
        target,
        status: session.status(),
        guesses,
    })
}
