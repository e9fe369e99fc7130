//! # trivia
//!
//! Answers multiple-choice trivia questions by counting how often each
//! candidate answer shows up in web pages about the question.
//!
//! # Pipeline
//!
//! 1. Decide [`Polarity`]: questions with `NOT` or `least` (but not
//!    `at least`) want the least-supported answer.
//! 2. Extract question keywords and search them; fetch the top pages
//!    concurrently and strip punctuation.
//! 3. Score answers by exact occurrences. If that is tied or all zero, fall
//!    back to answer-keyword occurrences, which always decides.
//! 4. Alongside, search every answer on its own and count the question's
//!    keywords in those pages. This cross-check is reported, not used.
//!
//! Search, fetch and keyword extraction are traits ([`Searcher`],
//! [`Fetcher`], [`KeywordExtractor`]); [`Solver::web`] wires in the
//! `trivia-search` backend.

pub mod config;
pub mod error;
pub mod evidence;
pub mod fanout;
pub mod keywords;
pub mod normalize;
pub mod polarity;
pub mod scoring;
pub mod solver;
pub mod web;

pub use config::AnswerConfig;
pub use error::{AnswerError, Result};
pub use evidence::{EvidenceGatherer, EvidenceText, Fetcher, Searcher};
pub use keywords::{KeywordExtractor, StopwordExtractor};
pub use polarity::Polarity;
pub use scoring::exact::ExactVerdict;
pub use solver::{AnswerReport, Method, Solver};

/// Answer `question` from live web search with the default configuration.
///
/// # Errors
///
/// Same as [`Solver::answer_with_report`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> trivia::Result<()> {
/// let answer = trivia::answer_question(
///     "Which of these is NOT a planet?",
///     &["Mars", "Pluto", "Venus"],
/// )
/// .await?;
/// println!("{answer}");
/// # Ok(())
/// # }
/// ```
pub async fn answer_question<A: AsRef<str>>(question: &str, answers: &[A]) -> Result<String> {
    Solver::web(AnswerConfig::default())?
        .answer_question(question, answers)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_answer_set_rejected_before_network() {
        let answers: [&str; 0] = [];
        let err = answer_question("Which is largest?", &answers).await.unwrap_err();
        assert!(matches!(err, AnswerError::Config(_)));
    }
}
