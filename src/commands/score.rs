//! Offline scoring command
//!
//! Scores one guess against a known target without any word service.

use crate::core::{Feedback, Word};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
///
/// # Examples
/// ```
/// use wordle_daily::commands::score_guess;
///
/// let result = score_guess("speed", "erase").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨⬜🟨🟨⬜");
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
