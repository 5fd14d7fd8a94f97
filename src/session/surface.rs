//! Display surface boundary

use crate::core::Mark;

/// Anything that can show the game: a terminal UI, a console, a test recorder
pub trait Surface {
    /// Color the cells of a scored row
    fn paint_row(&mut self, slot: usize, cells: &[(usize, Mark)]);

    /// Show a free-text message (win/loss announcement)
    fn show_message(&mut self, text: &str);

    /// Toggle the loading indicator shown around service calls
    fn set_loading(&mut self, loading: bool);
}
