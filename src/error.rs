//! Error types for the answering pipeline.
//!
//! Each variant names the phase that failed so a caller can tell a dead
//! search engine from a bad answer list.

/// Fatal failure of an `answer_question` call.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// Rejected input or configuration, raised before any network I/O.
    #[error("config error: {0}")]
    Config(String),

    /// The search collaborator failed; there is nothing to score.
    #[error("search error: {0}")]
    Search(String),

    /// A page fetch failed while failures are not being skipped.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// A scorer was handed input it cannot rank.
    #[error("scoring error: {0}")]
    Scoring(String),

    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AnswerError>;
