//! Random word HTTP API
//!
//! `GET <base>/word?length=<n>` answers with a JSON array of words; the first one
//! becomes the secret. Connection failures, timeouts and 5xx responses are retried
//! with exponential backoff, everything else fails immediately.

use super::{WordSource, WordSourceError};
use crate::core::Word;
use backoff::ExponentialBackoff;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking client for the random word API
#[derive(Debug, Clone)]
pub struct RandomWordApi {
    client: Client,
    base_url: String,
    max_elapsed: Duration,
}

impl RandomWordApi {
    pub const DEFAULT_URL: &'static str = "https://random-word-api.herokuapp.com";

    /// Create a client for the API at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, WordSourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_elapsed: Duration::from_secs(30),
        })
    }

    /// Cap the total time spent retrying
    #[must_use]
    pub fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = max_elapsed;
        self
    }

    fn url(&self, length: usize) -> String {
        format!("{}/word?length={length}", self.base_url.trim_end_matches('/'))
    }

    fn request(&self, url: &str) -> Result<Vec<String>, backoff::Error<reqwest::Error>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(classify)?;

        response.json::<Vec<String>>().map_err(backoff::Error::permanent)
    }
}

impl WordSource for RandomWordApi {
    fn fetch(&self, length: usize) -> Result<Word, WordSourceError> {
        let url = self.url(length);
        debug!(%url, "requesting word");

        let policy = ExponentialBackoff {
            max_elapsed_time: Some(self.max_elapsed),
            ..ExponentialBackoff::default()
        };

        let words = backoff::retry_notify(
            policy,
            || self.request(&url),
            |err: reqwest::Error, wait: Duration| {
                warn!(error = %err, ?wait, "word request failed, retrying");
            },
        )
        .map_err(|err| match err {
            backoff::Error::Permanent(err) | backoff::Error::Transient { err, .. } => err,
        })?;

        first_word(words, length)
    }
}

/// Decide whether a failed request is worth repeating
fn classify(err: reqwest::Error) -> backoff::Error<reqwest::Error> {
    let server_side = err.status().is_some_and(|s| s.is_server_error());
    if err.is_timeout() || err.is_connect() || server_side {
        backoff::Error::transient(err)
    } else {
        backoff::Error::permanent(err)
    }
}

/// Take the first word of an API response, insisting on the requested length
fn first_word(words: Vec<String>, length: usize) -> Result<Word, WordSourceError> {
    let first = words
        .into_iter()
        .next()
        .ok_or(WordSourceError::NoWordAvailable { length })?;

    let word = Word::new(first)?;
    if word.len() != length {
        return Err(WordSourceError::NoWordAvailable { length });
    }
    Ok(word)
}
