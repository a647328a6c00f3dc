//! Session start-up
//!
//! Fetches the secret behind a spinner, since the HTTP source may take a while.

use crate::game::Session;
use crate::providers::WordSource;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Ask `source` for a `length`-letter secret and open a session with it
///
/// # Errors
///
/// Returns an error if the source cannot supply a word; no session is created.
pub fn start_session(source: &dyn WordSource, length: usize) -> Result<Session> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Choosing a {length}-letter word..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let session = Session::start(source, length);
    spinner.finish_and_clear();

    let session = session.with_context(|| format!("could not start a {length}-letter game"))?;
    info!(length, "secret chosen");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::providers::{FixedWord, WordList};

    #[test]
    fn start_with_fixed_word() {
        let source = FixedWord::new(Word::new("crane").unwrap());
        let session = start_session(&source, 5).unwrap();
        assert_eq!(session.word_length(), 5);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn start_fails_without_word() {
        let err = start_session(&WordList::default(), 5).unwrap_err();
        assert!(err.to_string().contains("could not start a 5-letter game"));
    }
}
