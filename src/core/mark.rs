//! Per-letter classification labels

use std::fmt;

/// Scoring outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is at this exact position in the target
    Correct,
    /// Letter is in the target, but at another position
    Misplaced,
    /// Letter is absent, or all of its occurrences are already claimed
    Incorrect,
}

impl Mark {
    /// Class name handed to display surfaces
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "correct-misplaced",
            Self::Incorrect => "incorrect",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }

    /// Parse a single feedback character (`G`, `Y`, `-` or the matching emoji)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬜' => Some(Self::Incorrect),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
