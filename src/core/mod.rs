//! Core domain types for the game
//!
//! This module contains the word and scoring types with no I/O.
//! Everything here is pure and deterministic.

mod feedback;
mod mark;
mod word;

pub use feedback::Feedback;
pub use mark::Mark;
pub use word::{WORD_LENGTH, Word, WordError};
