//! Word lists for offline play
//!
//! Loads plain-text word lists (one word per line) into [`Word`](crate::core::Word)s.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};
