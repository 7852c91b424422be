//! Wordle decision engine
//!
//! Filtering, scoring and selection of the next guess, plus per-game state.

pub mod config;
pub mod entropy;
mod filter;
mod selector;
mod session;
mod statistics;

pub use config::{ConfigError, SolverConfig};
pub use entropy::{WordEntropyRanking, calculate_entropy, rank_words};
pub use filter::{filter_words, is_consistent};
pub use selector::{GuessSelector, ScoredGuess, SelectionError, select_guess};
pub use session::{GameSession, GameStatus, SessionError};
pub use statistics::{LetterStatistics, WordStatisticalScore, calculate_statistical_score};
