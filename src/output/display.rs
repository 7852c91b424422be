//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, word_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, Suggestion};
use crate::core::{Pattern, Word};
use crate::solver::GameStatus;
use colored::Colorize;

/// How many remaining candidates to list before eliding
const CANDIDATE_LIMIT: usize = 12;

/// Print the feedback a guess receives against a target
pub fn print_pattern(guess: &Word, target: &Word, pattern: Pattern) {
    println!(
        "{} vs {}: {} {} {}",
        guess.to_string().bright_white().bold(),
        target.to_string().bright_yellow(),
        colored_guess(guess, pattern),
        pattern.to_emoji(),
        pattern
    );
}

/// Print a recommendation for a game in progress
pub fn print_suggestion(suggestion: &Suggestion) {
    let remaining = suggestion.remaining.len();

    println!("\n{}", "─".repeat(60).cyan());
    match suggestion.status {
        GameStatus::NearCertain => println!("{}", "Only one candidate left!".green().bold()),
        _ => println!("{remaining} candidates remaining"),
    }
    if remaining <= CANDIDATE_LIMIT * 4 {
        println!("  {}", word_list(&suggestion.remaining, CANDIDATE_LIMIT).bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n📊 Suggested guess: {}",
        suggestion.best.to_string().bright_yellow().bold()
    );

    if !suggestion.alternatives.is_empty() {
        println!("\n   {:<7} {:>8} {:>7} {:>9}", "word", "entropy", "stats", "composite");
        for scored in &suggestion.alternatives {
            let marker = if scored.statistics.prime_suspect { "★" } else { " " };
            println!(
                "   {:<5} {} {:>8.3} {:>7.3} {:>9.3}",
                scored.word,
                marker.yellow(),
                scored.entropy,
                scored.statistics.total,
                scored.composite
            );
        }
        println!("\n   {} = could be the answer", "★".yellow());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
            println!("  Chosen in:  {:.1?}", step.elapsed);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let ranking = &result.ranking;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        ranking.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(ranking.entropy, ranking.remaining_count, 30);

    println!("\n📊 Against {} possible answers:", ranking.remaining_count);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", ranking.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", ranking.pattern_count);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Eliminates:  {:.1} on average", ranking.average_elimination);
    println!("   Worst case:  {} candidates", ranking.max_partition);
    println!(
        "   Answer:      {}",
        if ranking.is_prime_suspect {
            "possible".green()
        } else {
            "no".bright_black()
        }
    );

    let stats = &result.statistics;
    println!("\n🔤 {}", "Letter statistics:".bright_cyan().bold());
    println!("   Letter frequency:  {:.3}", stats.letter_frequency);
    println!("   Position match:    {:.3}", stats.position_probability);
    println!("   Score:             {:.3}", stats.total);

    println!("\n🧩 {}", "Largest groups:".bright_cyan().bold());
    for (pattern, size) in &result.largest_groups {
        println!("   {} {pattern}  {size:>5}", pattern.to_emoji());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Success rate:     {}",
        format!("{:.2}%", result.success_rate() * 100.0).green().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n⏱  {}", "Recommendation latency:".bright_cyan().bold());
    println!("   Recommendations:  {}", result.recommendations);
    println!("   Mean:             {:.2?}", result.mean_latency);
    println!("   Max:              {:.2?}", result.max_latency);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Failed:".red().bold());
        println!("   {}", word_list(&result.failed_words, 20));
    }
}
