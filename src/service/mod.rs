//! Word service boundary
//!
//! The session talks to the outside world through [`WordService`]: one call to
//! look up the word of the day, and one legality check per submitted guess.

mod http;
mod local;

pub use http::{DEFAULT_API_URL, HttpWordService};
pub use local::LocalWordService;

use crate::core::{Word, WordError};
use std::io;
use std::path::PathBuf;

/// Remote (or offline) source of the target word and of legal guesses
///
/// Implementations are shared with worker threads, hence `Send + Sync`.
pub trait WordService: Send + Sync {
    /// Fetch the raw word of the day. Callers normalize it.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers garbage.
    fn word_of_the_day(&self) -> Result<String, ServiceError>;

    /// Check whether `word` is an accepted guess
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers garbage.
    fn validate(&self, word: &Word) -> Result<bool, ServiceError>;
}

/// Failures talking to a [`WordService`]
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("service returned malformed word {word:?}: {source}")]
    MalformedWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("could not read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no valid words", .0.display())]
    EmptyWordList(PathBuf),

    #[error("validation worker stopped before answering")]
    Interrupted,
}
