//! Offline word service backed by a word list

use super::{ServiceError, WordService};
use crate::core::Word;
use crate::wordlists::load_from_file;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, info};

/// Picks the target at random from a word list and accepts only listed words
#[derive(Debug, Clone)]
pub struct LocalWordService {
    words: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl LocalWordService {
    /// Build a service from already-parsed words
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }

        let allowed = words.iter().map(|w| w.text().to_string()).collect();
        Some(Self { words, allowed })
    }

    /// Load the word list at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file(path: &Path) -> Result<Self, ServiceError> {
        let words = load_from_file(path).map_err(|source| ServiceError::WordList {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), count = words.len(), "loaded offline word list");
        Self::new(words).ok_or_else(|| ServiceError::EmptyWordList(path.to_path_buf()))
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

impl WordService for LocalWordService {
    fn word_of_the_day(&self) -> Result<String, ServiceError> {
        // Non-empty by construction
        let word = self
            .words
            .choose(&mut rand::rng())
            .map(|w| w.text().to_string())
            .unwrap_or_default();
        debug!(candidates = self.words.len(), "picked offline target");
        Ok(word)
    }

    fn validate(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.allowed.contains(word.text()))
    }
}
