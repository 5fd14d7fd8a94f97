//! Guess evaluation and feedback representation
//!
//! Feedback holds one [`Mark`] per letter of a guess:
//! - `Correct` = letter in the correct position (green)
//! - `Misplaced` = letter in the word, wrong position (yellow)
//! - `Incorrect` = letter not in the word (gray)

use super::{Mark, WORD_LENGTH, Word};

/// Stands in for a letter that has already been matched
const CONSUMED: u8 = 0;

/// Feedback for a single guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (the guess is the target)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are resolved in two passes:
    /// 1. Exact matches are marked and both letters consumed. Letters that do
    ///    not occur anywhere in the target are marked incorrect right away.
    /// 2. Each remaining guess letter, left to right, claims the leftmost
    ///    unconsumed occurrence in the target, or is marked incorrect.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Misplaced, Mark::Incorrect, Mark::Misplaced, Mark::Misplaced, Mark::Incorrect]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks: [Option<Mark>; WORD_LENGTH] = [None; WORD_LENGTH];
        let mut remaining = *target.chars();

        // Allow: Index needed to compare guess[i] with remaining[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if !target.has_letter(letter) {
                marks[i] = Some(Mark::Incorrect);
            } else if letter == remaining[i] {
                marks[i] = Some(Mark::Correct);
                remaining[i] = CONSUMED;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if mark.is_some() {
                continue;
            }

            let letter = guess.char_at(i);
            *mark = Some(match remaining.iter().position(|&ch| ch == letter) {
                Some(found) => {
                    remaining[found] = CONSUMED;
                    Mark::Misplaced
                }
                None => Mark::Incorrect,
            });
        }

        Self(marks.map(|mark| mark.unwrap_or(Mark::Incorrect)))
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is in the correct position
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Misplaced).count()
    }

    /// `(cell index, mark)` pairs in display order
    pub fn cells(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks: Vec<Mark> = s.chars().map(Mark::from_char).collect::<Option<_>>()?;
        marks.try_into().ok().map(Self)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
