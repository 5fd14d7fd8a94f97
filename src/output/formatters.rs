//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// A single letter tile colored by its mark
#[must_use]
pub fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Misplaced => text.black().on_yellow().bold(),
        Mark::Incorrect => text.white().on_bright_black().bold(),
    }
}

/// A scored row of letter tiles
#[must_use]
pub fn colored_row(letters: &str, feedback: &Feedback) -> String {
    letters
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Comma-separated class names, e.g. "correct, incorrect, ..."
#[must_use]
pub fn feedback_labels(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|m| m.class_name())
        .collect::<Vec<_>>()
        .join(", ")
}
