//! Word representation
//!
//! A Word stores a lowercase sequence of letters of any positive length. The same
//! type carries the secret and every guess, so scoring only ever compares two `Word`s.

use std::fmt;
use thiserror::Error;

/// A case-normalized word of arbitrary length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacters(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. This is the constructor for secrets and word-list
    /// entries, so it insists on letters only.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than
    /// alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().chars().map(fold_case).collect();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters(bad));
        }

        Ok(Self::from_normalized(text))
    }

    /// Build a candidate guess from a raw input line
    ///
    /// Surrounding whitespace is trimmed and the rest is lowercased one character
    /// at a time, so the length of the guess is the length the player typed. No
    /// character validation happens here; the session only cares about length.
    #[must_use]
    pub fn guess(raw: &str) -> Self {
        Self::from_normalized(raw.trim().chars().map(fold_case).collect())
    }

    fn from_normalized(text: String) -> Self {
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Lowercase a single character without changing the character count
///
/// Characters whose lowercase form spans several code points (such as 'İ')
/// keep only the first one.
#[must_use]
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
