//! Offline word sources

use super::{WordSource, WordSourceError, loader};
use crate::core::Word;
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::debug;

/// Picks a random word of the requested length from an in-memory list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load a newline-separated list from disk
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        Ok(Self::new(loader::load_from_file(path)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn fetch(&self, length: usize) -> Result<Word, WordSourceError> {
        let candidates: Vec<&Word> = self.words.iter().filter(|w| w.len() == length).collect();
        debug!(length, candidates = candidates.len(), "choosing from word list");

        candidates
            .choose(&mut rand::rng())
            .map(|&word| word.clone())
            .ok_or(WordSourceError::NoWordAvailable { length })
    }
}

/// Always hands out the same word
#[derive(Debug, Clone)]
pub struct FixedWord {
    word: Word,
}

impl FixedWord {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

impl WordSource for FixedWord {
    fn fetch(&self, length: usize) -> Result<Word, WordSourceError> {
        if self.word.len() == length {
            Ok(self.word.clone())
        } else {
            Err(WordSourceError::NoWordAvailable { length })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::loader::parse_words;

    #[test]
    fn word_list_picks_requested_length() {
        let list = WordList::new(parse_words("cat\ncrane\ndog\nslate\n"));

        for _ in 0..20 {
            let word = list.fetch(5).unwrap();
            assert!(["crane", "slate"].contains(&word.text()));

            let short = list.fetch(3).unwrap();
            assert!(["cat", "dog"].contains(&short.text()));
        }
    }

    #[test]
    fn word_list_without_match_has_no_word() {
        let list = WordList::new(parse_words("cat\ndog\n"));
        assert!(matches!(
            list.fetch(7),
            Err(WordSourceError::NoWordAvailable { length: 7 })
        ));
        assert!(matches!(
            WordList::default().fetch(5),
            Err(WordSourceError::NoWordAvailable { length: 5 })
        ));
    }

    #[test]
    fn word_list_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WordList::from_file(dir.path().join("nope.txt")),
            Err(WordSourceError::Io(_))
        ));
    }

    #[test]
    fn fixed_word_checks_length() {
        let source = FixedWord::new(Word::new("crane").unwrap());
        assert_eq!(source.fetch(5).unwrap().text(), "crane");
        assert!(matches!(
            source.fetch(4),
            Err(WordSourceError::NoWordAvailable { length: 4 })
        ));
    }
}
