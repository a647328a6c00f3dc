//! One-shot scoring
//!
//! Scores a single guess against a given answer without starting a game.

use crate::core::{Feedback, Word};
use crate::game::{GameError, Round};
use anyhow::{Context, Result};

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if the answer is not a valid word or the lengths differ.
pub fn score_words(guess: &str, answer: &str) -> Result<Round> {
    let answer = Word::new(answer).context("invalid answer")?;
    let guess = Word::guess(guess);

    if guess.len() != answer.len() {
        return Err(GameError::LengthMismatch {
            expected: answer.len(),
            actual: guess.len(),
        }
        .into());
    }

    let feedback = Feedback::calculate(&guess, &answer);
    Ok(Round::new(guess, feedback))
}
