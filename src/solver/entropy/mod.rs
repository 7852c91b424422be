//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the primary term of every guess score.

mod calculator;
mod ranking;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, partition_by_pattern, pattern_counts,
    shannon_entropy,
};
pub use ranking::{WordEntropyRanking, rank_words};
