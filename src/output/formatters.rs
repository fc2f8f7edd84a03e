//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Pattern};
use colored::Colorize;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Render a guess as coloured letter tiles, one per position
#[must_use]
pub fn colored_tiles(guess: &str, pattern: Pattern) -> String {
    guess
        .chars()
        .zip(pattern.statuses())
        .map(|(letter, status)| {
            let tile = format!(" {letter} ");
            match status {
                LetterStatus::Correct => tile.black().on_green().bold().to_string(),
                LetterStatus::Present => tile.black().on_yellow().bold().to_string(),
                LetterStatus::Absent => tile.white().on_bright_black().to_string(),
            }
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
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_gray() {
        let pattern = Pattern::parse("-----").unwrap();
        assert_eq!(pattern_to_emoji(pattern), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_tiles_keep_letters() {
        colored::control::set_override(false);
        let tiles = colored_tiles("CRANE", Pattern::parse("G-Y--").unwrap());
        assert_eq!(tiles, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
