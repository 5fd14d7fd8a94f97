//! Wordle Daily
//!
//! Play the daily five-letter word puzzle in the terminal. The word of the day
//! and the list of accepted guesses come from a word service; each guess is
//! scored locally.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Feedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word of the day and legality checks
pub mod service;

// Offline word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
