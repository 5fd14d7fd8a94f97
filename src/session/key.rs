//! Logical key events

/// A single key press as seen by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
}

impl Key {
    /// Map a raw key identifier (`"a"`, `"Backspace"`, `"Enter"`) to a key
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::session::Key;
    ///
    /// assert_eq!(Key::from_identifier("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::from_identifier("q"), Some(Key::Char('q')));
    /// assert_eq!(Key::from_identifier("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "Backspace" => Some(Self::Backspace),
            "Enter" => Some(Self::Enter),
            _ => {
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Self::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}
