//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, PATTERN_COUNT, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render each letter of `word` on the background color of its feedback
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.letters()
        .iter()
        .zip(pattern.feedback())
        .map(|(&letter, state)| {
            let tile = format!(" {} ", char::from(letter));
            let tile: ColoredString = match state {
                LetterFeedback::Green => tile.black().on_green(),
                LetterFeedback::Yellow => tile.black().on_yellow(),
                LetterFeedback::Gray => tile.white().on_bright_black(),
            };
            tile.bold().to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a guess could reveal about `candidates` words
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.clamp(1, PATTERN_COUNT) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// List words compactly, eliding past `limit`
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(Word::text).collect();
    if words.len() > limit {
        format!("{} … (+{} more)", shown.join(" "), words.len() - limit)
    } else {
        shown.join(" ")
    }
}
