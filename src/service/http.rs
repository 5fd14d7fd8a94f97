//! JSON word API over HTTP

use super::{ServiceError, WordService};
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Public word API used when no base URL is configured
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordOfTheDayResponse {
    word: String,
    #[serde(default)]
    puzzle_number: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Word service backed by the `word-of-the-day` / `validate-word` endpoints
pub struct HttpWordService {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpWordService {
    /// Create a client for `base_url`; every request is bounded by `timeout`
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("wordle_daily/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn transport(url: &str, err: ureq::Error) -> ServiceError {
    warn!(%url, error = %err, "word service request failed");
    ServiceError::Transport {
        url: url.to_string(),
        source: Box::new(err),
    }
}

fn decode(url: &str, err: std::io::Error) -> ServiceError {
    warn!(%url, error = %err, "word service response could not be decoded");
    ServiceError::Decode {
        url: url.to_string(),
        source: err,
    }
}

impl WordService for HttpWordService {
    fn word_of_the_day(&self) -> Result<String, ServiceError> {
        let url = self.endpoint("word-of-the-day");
        debug!(%url, "fetching word of the day");

        let body: WordOfTheDayResponse = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| transport(&url, e))?
            .into_json()
            .map_err(|e| decode(&url, e))?;

        debug!(puzzle = ?body.puzzle_number, "word of the day received");
        Ok(body.word)
    }

    fn validate(&self, word: &Word) -> Result<bool, ServiceError> {
        let url = self.endpoint("validate-word");
        debug!(%url, %word, "validating guess");

        let body: ValidateResponse = self
            .agent
            .post(&url)
            .send_json(ValidateRequest { word: word.text() })
            .map_err(|e| transport(&url, e))?
            .into_json()
            .map_err(|e| decode(&url, e))?;

        debug!(%word, valid = body.valid_word, "validation answered");
        Ok(body.valid_word)
    }
}
