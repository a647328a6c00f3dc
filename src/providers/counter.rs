//! Game counters
//!
//! The number shown in the summary header (`Wordle 1234 3/6`). The game never
//! interprets it; it only asks for the next one.

use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Hands out display ids, one per game
pub trait GameCounter {
    /// Produce the id for the game about to start
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store cannot be read or written.
    fn next(&mut self) -> Result<u64, CounterError>;
}

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("counter file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("counter file {} does not hold a number: {content:?}", .path.display())]
    Corrupt { path: PathBuf, content: String },
}

/// Monotonic counter persisted as a single integer in a text file
///
/// A missing file counts as zero, so the first game is number 1.
#[derive(Debug, Clone)]
pub struct FileCounter {
    path: PathBuf,
}

impl FileCounter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<u64, CounterError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        content.trim().parse().map_err(|_| CounterError::Corrupt {
            path: self.path.clone(),
            content,
        })
    }
}

impl GameCounter for FileCounter {
    fn next(&mut self) -> Result<u64, CounterError> {
        let value = self.read()? + 1;
        fs::write(&self.path, format!("{value}\n"))?;
        debug!(path = %self.path.display(), value, "game counter advanced");
        Ok(value)
    }
}

/// Random four-digit id, for when nothing is persisted
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomId;

impl GameCounter for RandomId {
    fn next(&mut self) -> Result<u64, CounterError> {
        Ok(rand::rng().random_range(1000..=9999))
    }
}

/// In-memory counter starting after `start`
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceCounter {
    current: u64,
}

impl SequenceCounter {
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self { current: start }
    }
}

impl GameCounter for SequenceCounter {
    fn next(&mut self) -> Result<u64, CounterError> {
        self.current += 1;
        Ok(self.current)
    }
}
