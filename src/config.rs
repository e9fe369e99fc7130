//! Solver configuration, loadable from TOML.
//!
//! ```toml
//! question_results = 5
//! answer_results = 3
//! fetch_timeout_seconds = 10
//! skip_failed_fetches = true
//!
//! [search]
//! engines = ["duckduckgo", "bing"]
//! timeout_seconds = 8
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use trivia_search::SearchConfig;

use crate::error::{AnswerError, Result};

/// Knobs for one solver instance. Missing TOML keys take the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerConfig {
    /// URLs requested for the question query.
    pub question_results: usize,
    /// URLs requested per answer for the cross-evidence check.
    pub answer_results: usize,
    /// Maximum searches and fetches in flight at once, shared by the question
    /// and cross-evidence phases. `None` uses the machine's CPU count.
    pub parallelism: Option<usize>,
    /// Per-page fetch deadline in seconds.
    pub fetch_timeout_seconds: u64,
    /// Log and skip pages that fail to fetch instead of aborting.
    pub skip_failed_fetches: bool,
    /// Run the cross-evidence check alongside the main chain.
    pub cross_check: bool,
    /// Engine and HTTP settings for the web backend.
    pub search: SearchConfig,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            question_results: 5,
            answer_results: 3,
            parallelism: None,
            fetch_timeout_seconds: 10,
            skip_failed_fetches: true,
            cross_check: true,
            search: SearchConfig::default(),
        }
    }
}

impl AnswerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Io`] if the file cannot be read and
    /// [`AnswerError::Config`] if it does not parse or validate.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| AnswerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.question_results == 0 {
            return Err(AnswerError::Config(
                "question_results must be greater than 0".into(),
            ));
        }
        if self.answer_results == 0 {
            return Err(AnswerError::Config(
                "answer_results must be greater than 0".into(),
            ));
        }
        if self.parallelism == Some(0) {
            return Err(AnswerError::Config(
                "parallelism must be greater than 0".into(),
            ));
        }
        if self.fetch_timeout_seconds == 0 {
            return Err(AnswerError::Config(
                "fetch_timeout_seconds must be greater than 0".into(),
            ));
        }
        self.search
            .validate()
            .map_err(|e| AnswerError::Config(format!("search: {e}")))
    }

    /// Concurrent fetch limit actually used.
    pub fn effective_parallelism(&self) -> usize {
        self.parallelism.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(4)
        })
    }
}
