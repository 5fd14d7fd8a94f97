//! Runtime configuration
//!
//! Collected from command-line flags (and `WORDLE_API_URL`) in `main`.

use crate::service::{
    DEFAULT_API_URL, HttpWordService, LocalWordService, ServiceError, WordService,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default bound on every word service request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the word API
    pub api_url: String,
    /// Request timeout for the word API
    pub timeout: Duration,
    /// Play offline against this word list instead of the API
    pub word_list: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            word_list: None,
        }
    }
}

impl Config {
    /// Build the word service this configuration describes
    ///
    /// # Errors
    ///
    /// Returns an error if an offline word list is configured but cannot be
    /// loaded.
    pub fn word_service(&self) -> Result<Arc<dyn WordService>, ServiceError> {
        match &self.word_list {
            Some(path) => Ok(Arc::new(LocalWordService::from_file(path)?)),
            None => Ok(Arc::new(HttpWordService::new(&self.api_url, self.timeout))),
        }
    }
}
