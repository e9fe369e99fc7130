//! Error types for web search and page retrieval.
//!
//! Messages are stable and carry no request headers or cookies.

/// Errors raised while querying engines or fetching result pages.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Every configured engine failed; the message lists each engine's error.
    #[error("all search engines failed: {0}")]
    AllEnginesFailed(String),

    /// A request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Transport or status error talking to an engine or page host.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be turned into results or text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Rejected configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Map a [`reqwest::Error`] to [`SearchError::Timeout`] or
    /// [`SearchError::Http`], prefixing `context`.
    pub(crate) fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{context}: {err}"))
        } else {
            Self::Http(format!("{context}: {err}"))
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
