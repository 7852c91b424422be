//! Simple interactive CLI mode
//!
//! The solver suggests, the player reports the feedback they saw.

use crate::core::{GuessConstraint, Pattern, Word};
use crate::output::formatters::{colored_guess, word_list};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{GameSession, GameStatus, GuessSelector};
use crate::wordlists::WordStore;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the feedback prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    /// Feedback for the suggested word
    Feedback(Pattern),
    /// Feedback for a word the player chose instead
    Played(GuessConstraint),
    Invalid(String),
}

fn parse_input(raw: &str) -> Input {
    let input = raw.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "yes" | "solved" => Input::Feedback(Pattern::PERFECT),
        _ if input.contains(['=', ':']) => match input.parse::<GuessConstraint>() {
            Ok(constraint) => Input::Played(constraint),
            Err(e) => Input::Invalid(e.to_string()),
        },
        _ => match input.parse::<Pattern>() {
            Ok(pattern) => Input::Feedback(pattern),
            Err(e) => Input::Invalid(e.to_string()),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(store: &WordStore, selector: &GuessSelector) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Advisor - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that reveal the most about the answer.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use X/-/_/⬜ for gray (not in word)");
    println!("  - Played something else? Enter WORD=PATTERN, e.g. SLATE=XXGYX");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut session = GameSession::new(store, selector);

    loop {
        match session.status() {
            GameStatus::Solved => {
                celebrate(&session);
                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            GameStatus::Failed => {
                println!("\n{}", "Out of attempts!".red().bold());
                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session.reset();
                continue;
            }
            GameStatus::Inconsistent => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");
                match parse_input(&get_user_input("Command")?) {
                    Input::Undo => undo(&mut session),
                    Input::NewGame => {
                        session.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    Input::Quit => return Ok(()),
                    _ => {}
                }
                continue;
            }
            GameStatus::InProgress | GameStatus::NearCertain => {}
        }

        let guess = session.recommend().map_err(|e| e.to_string())?;
        let turn = session.attempts_used() + 1;
        let candidates = session.candidates();

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");

        let metrics = calculate_metrics(&guess, candidates);
        println!("\n📊 Suggested guess: {}", guess.to_string().bright_yellow().bold());
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!("   Expected remain:  {:.1} candidates", metrics.expected_remaining);
        println!("   Worst case:       {} candidates\n", metrics.max_partition);

        if candidates.len() <= 10 {
            println!("Remaining candidates: {}\n", word_list(candidates, 10));
        }

        loop {
            let constraint = match parse_input(&get_user_input("Enter feedback (G/Y/X, 'win', or command)")?) {
                Input::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Input::NewGame => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    break;
                }
                Input::Undo => {
                    undo(&mut session);
                    break;
                }
                Input::Feedback(pattern) => GuessConstraint::new(guess, pattern),
                Input::Played(constraint) => constraint,
                Input::Invalid(reason) => {
                    println!("❌ {reason}. Use G/Y/X, 'win', or '🟩🟨⬜🟩🟨'\n");
                    continue;
                }
            };

            println!("   {}\n", colored_guess(&constraint.guess, constraint.pattern));
            session.record(constraint).map_err(|e| e.to_string())?;
            break;
        }
    }
}

fn undo(session: &mut GameSession<'_>) {
    match session.undo() {
        Some(undone) => println!("✓ Undid {}! Back to turn {}\n", undone.guess, session.attempts_used() + 1),
        None => println!("Nothing to undo!\n"),
    }
}

fn celebrate(session: &GameSession<'_>) {
    let turns = session.attempts_used();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turns {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, constraint) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            constraint.guess.to_string().bright_white().bold(),
            constraint.pattern.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("input closed".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" N "), Input::NewGame);
        assert_eq!(parse_input("undo"), Input::Undo);
        assert_eq!(parse_input("win"), Input::Feedback(Pattern::PERFECT));
    }

    #[test]
    fn parses_feedback() {
        assert_eq!(
            parse_input("gy-xg"),
            Input::Feedback("GYXXG".parse().unwrap())
        );
        assert!(matches!(parse_input("gyx"), Input::Invalid(_)));
    }

    #[test]
    fn parses_played_word() {
        let expected = GuessConstraint::parse("SLATE", "XXGYX").unwrap();
        assert_eq!(parse_input("slate=xxgyx"), Input::Played(expected));
        assert!(matches!(parse_input("sl=xxgyx"), Input::Invalid(_)));
    }

    #[test]
    fn played_word_is_recorded_in_session() {
        let store = WordStore::from_strs(&["CRANE", "SLATE", "PLATE"], &[]).unwrap();
        let selector = GuessSelector::with_defaults(&store).unwrap();
        let mut session = GameSession::new(&store, &selector);

        let Input::Played(constraint) = parse_input("PLATE=XGGGG") else {
            panic!("expected a played word");
        };
        session.record(constraint).unwrap();
        assert_eq!(session.candidates(), [Word::new("SLATE").unwrap()]);
    }
}
