//! Wordle Advisor - CLI
//!
//! Recommends the next Wordle guess from the feedback seen so far, using information
//! theory over user-supplied answer and guess lists.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{
        analyze_word, run_benchmark, run_simple, sample_targets, solve_word, suggest,
    },
    core::{GuessConstraint, Pattern, Word},
    output::{
        print_analysis_result, print_benchmark_result, print_pattern, print_solve_result,
        print_suggestion,
    },
    solver::{GuessSelector, SolverConfig},
    wordlists::{WordStore, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess advisor using entropy-maximizing selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: possible hidden words, one per line
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Guess list: every allowed guess, one per line (default: the answer list)
    #[arg(short, long)]
    guesses: Option<PathBuf>,

    /// Maximum number of words scored per recommendation
    #[arg(long, default_value_t = wordle_advisor::solver::config::DEFAULT_CANDIDATE_CAP)]
    cap: usize,

    /// Bonus for guesses that could be the answer
    #[arg(long, default_value_t = wordle_advisor::solver::config::DEFAULT_PRIME_SUSPECT_BONUS)]
    prime_bonus: f64,

    /// Weight of letter statistics in the guess score (0 = tie-break only)
    #[arg(long, default_value_t = 0.0)]
    stat_weight: f64,

    /// Opening-word preferences, comma separated (first one in the guess list wins)
    #[arg(long, value_delimiter = ',')]
    opening: Vec<String>,

    /// Compute the first guess instead of using the opening word
    #[arg(long)]
    no_opening_book: bool,

    /// Guesses allowed per game
    #[arg(long, default_value_t = wordle_advisor::solver::config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interactive mode (default)
    Simple,

    /// Suggest the next guess given the feedback so far
    Suggest {
        /// Feedback so far, e.g. CRANE=XYGXX SLOTH=GXXXX
        history: Vec<GuessConstraint>,

        /// Number of alternatives to list
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Show the feedback a guess receives against a target
    Pattern {
        guess: String,
        target: String,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random answers to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for picking the answers
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Play every answer instead of a sample
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig::default()
            .with_candidate_cap(self.cap)
            .with_prime_suspect_bonus(self.prime_bonus)
            .with_statistical_weight(self.stat_weight)
            .with_opening_fast_path(!self.no_opening_book)
            .with_max_attempts(self.max_attempts);
        if !self.opening.is_empty() {
            config = config.with_opening_words(self.opening.iter().cloned());
        }
        config
    }
}

/// Load the word store from the --answers and --guesses files
fn load_store(answers: Option<&Path>, guesses: Option<&Path>) -> Result<WordStore> {
    let answers_path = answers.ok_or_else(|| anyhow!("--answers <FILE> is required"))?;

    let answers = load_from_file(answers_path)
        .with_context(|| format!("loading answers from {}", answers_path.display()))?;
    let guesses = match guesses {
        Some(path) => {
            load_from_file(path).with_context(|| format!("loading guesses from {}", path.display()))?
        }
        None => answers.clone(),
    };

    log::info!(
        "loaded {} answers and {} guesses",
        answers.len(),
        guesses.len()
    );
    Ok(WordStore::new(answers, guesses)?)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(usize::from(cli.verbose) + 1)
        .timestamp(stderrlog::Timestamp::Off)
        .init()?;

    match cli.command.take().unwrap_or(Commands::Simple) {
        Commands::Pattern { guess, target } => run_pattern_command(&guess, &target),
        Commands::Simple => {
            let (store, selector) = load_engine(&cli)?;
            run_simple(&store, &selector).map_err(|e| anyhow!(e))
        }
        Commands::Suggest { history, top } => {
            let (store, selector) = load_engine(&cli)?;
            let suggestion = suggest(&history, &store, &selector, top).map_err(|e| anyhow!(e))?;
            print_suggestion(&suggestion);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let (store, selector) = load_engine(&cli)?;
            let result = solve_word(&word, &store, &selector).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let (store, _) = load_engine(&cli)?;
            let result = analyze_word(&word, &store).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed, all } => {
            let (store, selector) = load_engine(&cli)?;
            run_benchmark_command(&store, &selector, count, seed, all);
            Ok(())
        }
    }
}

fn load_engine(cli: &Cli) -> Result<(WordStore, GuessSelector)> {
    let store = load_store(cli.answers.as_deref(), cli.guesses.as_deref())?;
    let selector = GuessSelector::new(cli.solver_config(), &store)?;
    Ok((store, selector))
}

fn run_pattern_command(guess: &str, target: &str) -> Result<()> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let target = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
    print_pattern(&guess, &target, Pattern::calculate(&guess, &target));
    Ok(())
}

fn run_benchmark_command(
    store: &WordStore,
    selector: &GuessSelector,
    count: usize,
    seed: u64,
    all: bool,
) {
    let targets = if all {
        println!("Running benchmark on all {} answers...", store.answers().len());
        store.answers().to_vec()
    } else {
        println!("Running benchmark on {count} random answers (seed {seed})...");
        sample_targets(store.answers(), count, seed)
    };

    let result = run_benchmark(store, selector, &targets, true);
    print_benchmark_result(&result);
}
