//! One-shot suggestion command
//!
//! Takes the feedback observed so far and recommends the next guess.

use crate::core::{GuessConstraint, Word};
use crate::solver::{GameSession, GameStatus, GuessSelector, ScoredGuess};
use crate::wordlists::WordStore;

/// Recommendation for a game in progress
pub struct Suggestion {
    pub status: GameStatus,
    pub remaining: Vec<Word>,
    pub best: Word,
    /// Best-scored pool words, empty when the opening word or a sole candidate was used
    pub alternatives: Vec<ScoredGuess>,
}

/// Suggest the next guess after the given history
///
/// # Errors
///
/// Returns an error if the game is already over or no answer fits the feedback.
pub fn suggest(
    history: &[GuessConstraint],
    store: &WordStore,
    selector: &GuessSelector,
    top: usize,
) -> Result<Suggestion, String> {
    let mut session = GameSession::new(store, selector);
    for &constraint in history {
        session.record(constraint).map_err(|e| e.to_string())?;
    }

    let best = session.recommend().map_err(|e| e.to_string())?;

    let alternatives = if history.is_empty() || session.candidates().len() <= 1 {
        Vec::new()
    } else {
        let mut scored = selector.evaluate(session.candidates(), store.guesses());
        scored.truncate(top);
        scored
    };

    Ok(Suggestion {
        status: session.status(),
        remaining: session.candidates().to_vec(),
        best,
        alternatives,
    })
}
