//! Turn-based game session
//!
//! A session owns the secret, the append-only history of rounds and the
//! current state. It is a plain value: no I/O, no shared state, one per game.

use super::report::{Outcome, Report};
use crate::core::{Feedback, LetterStatus, Word};
use crate::providers::{WordSource, WordSourceError};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Number of valid guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `Won` and `Lost` accept no further rounds
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    guess: Word,
    feedback: Feedback,
}

impl Round {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Reasons a submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Recoverable: the player is asked again and no attempt is used up
    #[error("Word must be of {expected} letters length! (got {actual})")]
    LengthMismatch { expected: usize, actual: usize },
    /// Caller error: the session already finished
    #[error("game is already over ({0:?})")]
    AlreadyTerminal(GameState),
}

/// A single game from secret selection to outcome
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    history: Vec<Round>,
    state: GameState,
}

impl Session {
    /// Start a session with a known secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        debug!(length = secret.len(), "session created");
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            state: GameState::InProgress,
        }
    }

    /// Start a session by asking `source` for a secret of `length` letters
    ///
    /// # Errors
    ///
    /// Returns the source's error, or `NoWordAvailable` if it handed back a word of
    /// the wrong length. No session exists in either case.
    pub fn start<S: WordSource + ?Sized>(
        source: &S,
        length: usize,
    ) -> Result<Self, WordSourceError> {
        let secret = source.fetch(length)?;
        if secret.len() != length {
            return Err(WordSourceError::NoWordAvailable { length });
        }
        Ok(Self::new(secret))
    }

    /// Submit a raw guess
    ///
    /// The input is trimmed and lowercased, scored against the secret and appended
    /// to the history. The returned round is the one just recorded.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the guess length differs from the secret's; nothing
    ///   changes and the attempt is not counted
    /// - `AlreadyTerminal` if the game is over
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameError, GameState, Session};
    ///
    /// let mut session = Session::new(Word::new("crane").unwrap());
    ///
    /// assert!(matches!(
    ///     session.submit("cat"),
    ///     Err(GameError::LengthMismatch { expected: 5, actual: 3 })
    /// ));
    /// assert_eq!(session.attempts(), 0);
    ///
    /// session.submit("CRANE").unwrap();
    /// assert_eq!(session.state(), GameState::Won);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<&Round, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::AlreadyTerminal(self.state));
        }

        let guess = Word::guess(raw);
        if guess.len() != self.secret.len() {
            debug!(expected = self.secret.len(), actual = guess.len(), "guess rejected");
            return Err(GameError::LengthMismatch {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        let solved = guess == self.secret;
        self.history.push(Round::new(guess, feedback));

        if solved {
            self.state = GameState::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        debug!(attempt = self.history.len(), state = ?self.state, "guess accepted");
        if self.state.is_terminal() {
            info!(attempts = self.history.len(), state = ?self.state, "game over");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Accepted rounds, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Number of attempts used so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Summary of a finished game, or `None` while it is still running
    #[must_use]
    pub fn report(&self) -> Option<Report<'_>> {
        let outcome = match self.state {
            GameState::InProgress => return None,
            GameState::Won => Outcome::Won {
                attempts: self.history.len(),
            },
            GameState::Lost => Outcome::Lost,
        };

        Some(Report::new(outcome, &self.history, &self.secret))
    }

    /// Best status seen so far for every guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterStatus> {
        let mut hints = FxHashMap::default();
        for round in &self.history {
            for (&letter, status) in round.guess.chars().iter().zip(round.feedback.iter()) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterStatus| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
        hints
    }
}
