//! Search and fetch configuration.
//!
//! [`SearchConfig`] is embedded in the solver's TOML file under `[search]`,
//! so every field has a default and missing keys fall back to it.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::SearchEngine;

/// Controls which engines are scraped and how pages are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Engines queried concurrently for every search.
    pub engines: Vec<SearchEngine>,
    /// Upper bound on merged hits returned by [`crate::search`].
    pub max_results: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Ask engines for safe-search filtering.
    pub safe_search: bool,
    /// Fixed User-Agent. `None` picks a browser UA per client.
    pub user_agent: Option<String>,
    /// Extracted page text is cut at this many bytes.
    pub max_page_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engines: SearchEngine::all().to_vec(),
            max_results: 10,
            timeout_seconds: 8,
            safe_search: true,
            user_agent: None,
            max_page_chars: 100_000,
        }
    }
}

impl SearchConfig {
    /// Copy of this config limited to `max_results` hits.
    pub fn with_max_results(&self, max_results: usize) -> Self {
        Self {
            max_results,
            ..self.clone()
        }
    }

    /// Reject configurations that cannot produce a search.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.engines.is_empty() {
            return Err(SearchError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        if self.max_page_chars == 0 {
            return Err(SearchError::Config(
                "max_page_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.safe_search);
        assert!(config.user_agent.is_none());
        assert_eq!(config.max_page_chars, 100_000);
        assert_eq!(
            config.engines,
            vec![SearchEngine::DuckDuckGo, SearchEngine::Bing]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn no_engines_rejected() {
        let config = SearchConfig {
            engines: vec![],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("engine"));
    }

    #[test]
    fn zero_page_limit_rejected() {
        let config = SearchConfig {
            max_page_chars: 0,
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("max_page_chars"));
    }

    #[test]
    fn with_max_results_keeps_other_fields() {
        let config = SearchConfig {
            user_agent: Some("QuizBot/1.0".into()),
            ..Default::default()
        };
        let narrowed = config.with_max_results(3);
        assert_eq!(narrowed.max_results, 3);
        assert_eq!(narrowed.user_agent.as_deref(), Some("QuizBot/1.0"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"engines":["bing"],"safe_search":false}"#)
                .expect("deserialize");
        assert_eq!(config.engines, vec![SearchEngine::Bing]);
        assert!(!config.safe_search);
        assert_eq!(config.max_results, 10);
    }
}
