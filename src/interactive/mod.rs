//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Board, Message, MessageStyle, run_tui};
