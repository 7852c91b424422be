//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, play_game, solve_word};
pub use suggest::{Suggestion, suggest};
