//! Per-game state
//!
//! A [`GameSession`] owns one game's candidate set and feedback history. It borrows the
//! shared [`WordStore`] and [`GuessSelector`] read-only, so any number of sessions may run
//! side by side.

use super::filter::filter_words;
use super::selector::{GuessSelector, SelectionError};
use crate::core::{GuessConstraint, Word};
use crate::wordlists::WordStore;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// More than one candidate remains
    InProgress,
    /// Exactly one candidate remains; the next guess wins if feedback is honest
    NearCertain,
    /// The latest feedback was all green
    Solved,
    /// The attempt budget is spent without a solve
    Failed,
    /// No candidate is consistent with the feedback
    Inconsistent,
}

impl GameStatus {
    /// Whether no further guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

/// Error type for session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The game is solved or out of attempts
    GameOver(GameStatus),
    Selection(SelectionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(GameStatus::Solved) => write!(f, "game already solved"),
            Self::GameOver(_) => write!(f, "no attempts left"),
            Self::Selection(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameOver(_) => None,
            Self::Selection(e) => Some(e),
        }
    }
}

impl From<SelectionError> for SessionError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    store: &'a WordStore,
    selector: &'a GuessSelector,
    candidates: Vec<Word>,
    history: Vec<GuessConstraint>,
}

impl<'a> GameSession<'a> {
    /// Start a game with every answer as a candidate
    #[must_use]
    pub fn new(store: &'a WordStore, selector: &'a GuessSelector) -> Self {
        Self {
            store,
            selector,
            candidates: store.answers().to_vec(),
            history: Vec::new(),
        }
    }

    /// Words still consistent with the history
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessConstraint] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts().saturating_sub(self.history.len())
    }

    fn max_attempts(&self) -> usize {
        self.selector.config().max_attempts
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.history.last().is_some_and(GuessConstraint::is_solved) {
            GameStatus::Solved
        } else if self.history.len() >= self.max_attempts() {
            GameStatus::Failed
        } else if self.candidates.is_empty() {
            GameStatus::Inconsistent
        } else if self.candidates.len() == 1 {
            GameStatus::NearCertain
        } else {
            GameStatus::InProgress
        }
    }

    /// Best next guess for the current candidate set
    ///
    /// # Errors
    /// Returns `SessionError::GameOver` once the game is solved or failed, and
    /// `SessionError::Selection` when the history is contradictory.
    pub fn recommend(&self) -> Result<Word, SessionError> {
        let status = self.status();
        if status.is_over() {
            return Err(SessionError::GameOver(status));
        }
        self.selector
            .get_best_guess(&self.candidates, self.store.guesses(), &self.history)
            .map_err(SessionError::Selection)
    }

    /// Apply one round of feedback
    ///
    /// Only the new constraint is filtered against; the candidates already satisfy the
    /// earlier ones.
    ///
    /// # Errors
    /// Returns `SessionError::GameOver` once the game is solved or failed.
    pub fn record(&mut self, constraint: GuessConstraint) -> Result<GameStatus, SessionError> {
        let status = self.status();
        if status.is_over() {
            return Err(SessionError::GameOver(status));
        }

        self.candidates = filter_words(&self.candidates, std::slice::from_ref(&constraint));
        self.history.push(constraint);
        Ok(self.status())
    }

    /// Take back the latest round, recomputing the candidates from the full answer set
    pub fn undo(&mut self) -> Option<GuessConstraint> {
        let undone = self.history.pop()?;
        self.candidates = filter_words(self.store.answers(), &self.history);
        Some(undone)
    }

    /// Start over with every answer as a candidate
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = self.store.answers().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWERS: [&str; 6] = ["BATCH", "HATCH", "MATCH", "PATCH", "CRANE", "SLATE"];

    fn fixture() -> (WordStore, GuessSelector) {
        let store = WordStore::from_strs(&ANSWERS, &["BUMPH"]).unwrap();
        let selector = GuessSelector::with_defaults(&store).unwrap();
        (store, selector)
    }

    fn observe(guess: &str, target: &str) -> GuessConstraint {
        GuessConstraint::observed(Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn new_session_starts_with_all_answers() {
        let (store, selector) = fixture();
        let session = GameSession::new(&store, &selector);
        assert_eq!(session.candidates().len(), ANSWERS.len());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.recommend(), Ok(selector.opening_word()));
    }

    #[test]
    fn record_narrows_candidates_monotonically() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        let before = session.candidates().len();
        session.record(observe("CRANE", "MATCH")).unwrap();
        let after = session.candidates().len();

        assert!(after <= before);
        assert_eq!(session.candidates().len(), 4);
        assert!(session.candidates().iter().all(|w| w.text().ends_with("ATCH")));
    }

    #[test]
    fn solved_game_rejects_more_feedback() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        assert_eq!(session.record(observe("MATCH", "MATCH")), Ok(GameStatus::Solved));
        assert_eq!(
            session.record(observe("BATCH", "MATCH")),
            Err(SessionError::GameOver(GameStatus::Solved))
        );
        assert!(session.recommend().is_err());
    }

    #[test]
    fn single_candidate_is_near_certain() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        session.record(observe("CRANE", "MATCH")).unwrap();
        let status = session.record(observe("BUMPH", "MATCH")).unwrap();

        assert_eq!(status, GameStatus::NearCertain);
        assert_eq!(session.recommend(), Ok(Word::new("MATCH").unwrap()));
    }

    #[test]
    fn contradictory_feedback_is_inconsistent() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        session.record(GuessConstraint::parse("CRANE", "GGGGX").unwrap()).unwrap();
        assert_eq!(session.status(), GameStatus::Inconsistent);
        assert_eq!(
            session.recommend(),
            Err(SessionError::Selection(SelectionError::NoConsistentCandidates))
        );
    }

    #[test]
    fn attempts_run_out() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        for _ in 0..5 {
            session.record(observe("QUIRK", "MATCH")).unwrap();
        }
        assert_eq!(session.attempts_left(), 1);
        assert_eq!(session.record(observe("QUIRK", "MATCH")), Ok(GameStatus::Failed));
        assert_eq!(
            session.recommend(),
            Err(SessionError::GameOver(GameStatus::Failed))
        );
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        session.record(observe("CRANE", "MATCH")).unwrap();
        let after_first = session.candidates().to_vec();
        session.record(observe("BUMPH", "MATCH")).unwrap();

        assert_eq!(session.undo(), Some(observe("BUMPH", "MATCH")));
        assert_eq!(session.candidates(), after_first.as_slice());
        assert_eq!(session.history().len(), 1);

        session.undo();
        assert!(session.undo().is_none());
        assert_eq!(session.candidates(), store.answers());
    }

    #[test]
    fn reset_starts_over() {
        let (store, selector) = fixture();
        let mut session = GameSession::new(&store, &selector);

        session.record(observe("MATCH", "MATCH")).unwrap();
        session.reset();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.candidates(), store.answers());
    }
}
