//! Terminal output formatting
//!
//! Colored tiles and result printing for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_score_result};
