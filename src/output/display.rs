//! Display functions for line-oriented commands

use super::formatters::{colored_row, feedback_labels};
use crate::core::{Feedback, Word};
use crate::session::{MAX_GUESSES, Session};
use colored::Colorize;

/// Print the result of scoring one guess against a target
pub fn print_score_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}  {}", colored_row(guess.text(), feedback), feedback.to_emoji());
    println!("\n  {}", feedback_labels(feedback).bright_black());

    if feedback.is_win() {
        println!("\n{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "\n{} correct, {} misplaced",
            feedback.count_correct().to_string().green(),
            feedback.count_misplaced().to_string().yellow()
        );
    }
}

/// Print every scored row of a session
pub fn print_board(session: &Session) {
    println!();
    for (i, slot) in session.slots().iter().enumerate() {
        if let Some(feedback) = slot.feedback() {
            println!(
                "  {}/{MAX_GUESSES}  {}",
                i + 1,
                colored_row(&slot.text(), feedback)
            );
        }
    }
    println!();
}
