//! Benchmark command
//!
//! Plays full games against many targets and reports success rate, guess counts, and how
//! long each recommendation took.

use super::solve::play_game;
use crate::core::Word;
use crate::solver::GuessSelector;
use crate::wordlists::WordStore;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Targets not solved within the attempt budget
    pub failed_words: Vec<Word>,
    pub recommendations: usize,
    pub mean_latency: Duration,
    pub max_latency: Duration,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of targets solved, in [0, 1]
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64
    }
}

/// Draw `count` distinct targets from `answers`, reproducibly for a given seed
#[must_use]
pub fn sample_targets(answers: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut targets = answers.to_vec();
    targets.shuffle(&mut rng);
    targets.truncate(count);
    targets
}

/// Run the selector against every target
///
/// A progress bar is drawn when `show_progress` is set.
pub fn run_benchmark(
    store: &WordStore,
    selector: &GuessSelector,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed_words = Vec::new();
    let mut recommendations = 0;
    let mut total_latency = Duration::ZERO;
    let mut max_latency = Duration::ZERO;

    for (idx, &target) in targets.iter().enumerate() {
        match play_game(target, store, selector) {
            Ok(result) => {
                recommendations += result.guesses.len();
                total_latency += result.guesses.iter().map(|step| step.elapsed).sum::<Duration>();
                max_latency = max_latency.max(result.max_latency());

                if result.success() {
                    let guesses = result.guesses.len();
                    solved += 1;
                    total_guesses += guesses;
                    min_guesses = min_guesses.min(guesses);
                    max_guesses = max_guesses.max(guesses);
                    *distribution.entry(guesses).or_insert(0) += 1;
                } else {
                    failed_words.push(target);
                }
            }
            Err(e) => {
                warn!("game against {target} aborted: {e}");
                failed_words.push(target);
            }
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failed_words,
        recommendations,
        mean_latency: if recommendations == 0 {
            Duration::ZERO
        } else {
            total_latency / recommendations as u32
        },
        max_latency,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(e) => warn!("progress bar template rejected: {e}"),
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWERS: [&str; 10] = [
        "BATCH", "HATCH", "MATCH", "PATCH", "LATCH", "CRANE", "SLATE", "IRATE", "CRATE", "GRATE",
    ];

    fn fixture() -> (WordStore, GuessSelector) {
        let store = WordStore::from_strs(&ANSWERS, &["BUMPH", "CLAMP", "GROUP"]).unwrap();
        let selector = GuessSelector::with_defaults(&store).unwrap();
        (store, selector)
    }

    #[test]
    fn benchmark_runs() {
        let (store, selector) = fixture();
        let result = run_benchmark(&store, &selector, store.answers(), false);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!((result.success_rate() - 1.0).abs() < f64::EPSILON);
        assert!(result.failed_words.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert!(result.max_latency >= result.mean_latency);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let (store, selector) = fixture();
        let result = run_benchmark(&store, &selector, store.answers(), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(
            result.distribution.iter().map(|(g, n)| g * n).sum::<usize>(),
            result.total_guesses
        );
    }

    #[test]
    fn benchmark_empty_word_list() {
        let (store, selector) = fixture();
        let result = run_benchmark(&store, &selector, &[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_counts_unsolvable_targets_as_failures() {
        let (store, selector) = fixture();
        let outsider = Word::new("QUIRK").unwrap();
        let result = run_benchmark(&store, &selector, &[outsider], false);

        assert_eq!(result.solved, 0);
        assert_eq!(result.failed_words, [outsider]);
    }

    #[test]
    fn sampling_is_reproducible() {
        let (store, _) = fixture();
        let a = sample_targets(store.answers(), 4, 7);
        let b = sample_targets(store.answers(), 4, 7);

        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|w| store.is_answer(w)));
        assert_eq!(sample_targets(store.answers(), 50, 7).len(), store.answers().len());
    }
}
