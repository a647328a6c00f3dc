//! Capabilities the game is handed from outside
//!
//! The session never reaches for the network, the filesystem or ambient
//! randomness itself. Secrets come from a [`WordSource`] and display ids from a
//! [`GameCounter`], so tests can swap in fixed substitutes.

mod counter;
mod http;
pub mod loader;
mod word_list;

pub use counter::{CounterError, FileCounter, GameCounter, RandomId, SequenceCounter};
pub use http::RandomWordApi;
pub use word_list::{FixedWord, WordList};

use crate::core::{Word, WordError};
use thiserror::Error;

/// Supplies the secret word for a new session
pub trait WordSource {
    /// Return exactly one word of `length` letters
    ///
    /// # Errors
    ///
    /// `NoWordAvailable` when no word of that length can be produced, or the
    /// underlying transport/file error.
    fn fetch(&self, length: usize) -> Result<Word, WordSourceError>;
}

/// Why a word source could not produce a secret
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("no {length}-letter word is available")]
    NoWordAvailable { length: usize },
    #[error("word request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word source returned an invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
