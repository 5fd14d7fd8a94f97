//! One row of the guess grid

use crate::core::{Feedback, WORD_LENGTH, Word};

/// Letters typed into one attempt, plus its feedback once scored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    letters: Vec<u8>,
    feedback: Option<Feedback>,
}

impl Slot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    /// Letter at `position`, if one has been typed there
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).map(|&b| char::from(b))
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// The typed letters as a word, once the slot is full
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        if self.is_full() {
            Word::new(self.text()).ok()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.feedback.is_some()
    }

    pub(super) fn push(&mut self, letter: u8) -> bool {
        if self.is_full() || self.is_scored() {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub(super) fn pop(&mut self) -> bool {
        if self.is_scored() {
            return false;
        }
        self.letters.pop().is_some()
    }

    pub(super) fn score(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_five_letters() {
        let mut slot = Slot::default();
        for &b in b"CRANES" {
            slot.push(b);
        }

        assert!(slot.is_full());
        assert_eq!(slot.text(), "CRANE");
        assert_eq!(slot.word().unwrap().text(), "CRANE");
    }

    #[test]
    fn partial_slot_has_no_word() {
        let mut slot = Slot::default();
        slot.push(b'A');
        slot.push(b'B');

        assert_eq!(slot.len(), 2);
        assert_eq!(slot.letter_at(1), Some('B'));
        assert_eq!(slot.letter_at(2), None);
        assert!(slot.word().is_none());
    }

    #[test]
    fn scored_slot_is_frozen() {
        let mut slot = Slot::default();
        for &b in b"CRANE" {
            slot.push(b);
        }
        slot.score(Feedback::PERFECT);

        assert!(!slot.pop());
        assert_eq!(slot.text(), "CRANE");
        assert_eq!(slot.feedback(), Some(&Feedback::PERFECT));
    }
}
