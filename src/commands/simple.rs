//! Simple line-oriented game mode
//!
//! Plays the daily puzzle without the TUI: one guess per line.

use crate::core::{Mark, WORD_LENGTH};
use crate::output::formatters::tile;
use crate::output::print_board;
use crate::service::WordService;
use crate::session::{Key, KeyOutcome, MAX_GUESSES, Session, SubmitOutcome, Surface};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Console rendering of the display surface
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn paint_row(&mut self, slot: usize, cells: &[(usize, Mark)]) {
        let emoji: String = cells.iter().map(|(_, mark)| mark.emoji()).collect();
        println!("  {}/{MAX_GUESSES}  {emoji}", slot + 1);
    }

    fn show_message(&mut self, text: &str) {
        println!("\n{}", "═".repeat(40).bright_cyan());
        println!("  {}", text.bright_green().bold());
        println!("{}", "═".repeat(40).bright_cyan());
    }

    fn set_loading(&mut self, loading: bool) {
        print!("{}", loading_indicator(loading));
        // Best effort; the prompt follows anyway
        io::stdout().flush().ok();
    }
}

/// Text that shows or clears the busy indicator on the current line
fn loading_indicator(loading: bool) -> String {
    if loading {
        format!("  {}", "loading…".bright_black())
    } else {
        format!("\r{}\r", " ".repeat(12))
    }
}

/// Run the simple interactive mode against `service`
///
/// # Errors
///
/// Returns an error if the word of the day cannot be fetched or stdin/stdout
/// fail.
pub fn run_simple(service: &dyn WordService) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Daily Word         ║");
    println!("╚══════════════════════════════════════╝\n");

    let mut surface = ConsoleSurface;
    let mut session =
        Session::start(service, &mut surface).context("Could not fetch the word of the day")?;

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!(
        "Legend: {} right spot  {} wrong spot  {} not in word",
        tile('A', Mark::Correct),
        tile('B', Mark::Misplaced),
        tile('C', Mark::Incorrect)
    );
    println!("Type 'quit' to leave.\n");

    while !session.is_over() {
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.active_slot() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(());
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 The word stays hidden until tomorrow.\n");
            return Ok(());
        }

        if !enter_guess(&mut session, &input) {
            println!("❌ Enter exactly five letters\n");
            continue;
        }

        match session.submit(service, &mut surface) {
            SubmitOutcome::Rejected => println!("❌ Not in word list\n"),
            SubmitOutcome::Failed(err) => {
                println!("⚠️  Could not reach the word service ({err}). Try again.\n");
            }
            SubmitOutcome::Scored { .. } | SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        }
    }

    print_board(&session);
    Ok(())
}

/// Replace the active slot's letters with `input`
///
/// Returns `true` if the slot now holds a complete word.
fn enter_guess(session: &mut Session, input: &str) -> bool {
    if input.chars().count() != WORD_LENGTH || !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    while session.handle_key(Key::Backspace) != KeyOutcome::Ignored {}
    for ch in input.chars() {
        session.handle_key(Key::Char(ch));
    }
    session.cursor() == WORD_LENGTH
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn enter_guess_replaces_previous_letters() {
        let mut session = Session::new(Word::new("erase").unwrap());

        assert!(enter_guess(&mut session, "xxxxx"));
        assert!(enter_guess(&mut session, "Crane"));
        assert_eq!(session.slots()[0].text(), "CRANE");
    }

    #[test]
    fn enter_guess_rejects_bad_input() {
        let mut session = Session::new(Word::new("erase").unwrap());

        assert!(!enter_guess(&mut session, "cran"));
        assert!(!enter_guess(&mut session, "cranes"));
        assert!(!enter_guess(&mut session, "cr4ne"));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn loading_indicator_is_neutral_and_cleared() {
        colored::control::set_override(false);

        assert_eq!(loading_indicator(true), "  loading…");
        let cleared = loading_indicator(false);
        assert!(cleared.starts_with('\r') && cleared.ends_with('\r'));
        assert!(cleared.trim_matches('\r').chars().all(|c| c == ' '));
        assert!(cleared.len() > loading_indicator(true).chars().count());
    }
}
