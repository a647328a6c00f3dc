//! Word list loading utilities
//!
//! Reads newline-separated word lists from disk.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::providers::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&content);
    debug!(path = %path.as_ref().display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Parse one word per line, ignoring blank lines and entries that are not words
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_words_converts_valid_words() {
        let words = parse_words("crane\nslate\nirate\n");

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn parse_words_skips_invalid_and_blank() {
        let words = parse_words("crane\n\n  \nnot a word\nab3\n  Slate  \n");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_keeps_any_length() {
        let words = parse_words("a\nto\nextraordinary\n");
        let lengths: Vec<usize> = words.iter().map(Word::len).collect();
        assert_eq!(lengths, [1, 2, 13]);
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
