//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Letters of `guess` on the tile colors of `pattern`
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", letter as char);
            match mark {
                Mark::Correct => tile.black().on_green().to_string(),
                Mark::Present => tile.black().on_yellow().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits, width)
}

/// A 0-99 rating, green when high and red when low
#[must_use]
pub fn rating(value: u8) -> ColoredString {
    let text = format!("{value:2}");
    match value {
        80.. => text.green().bold(),
        50..80 => text.yellow(),
        _ => text.red(),
    }
}
