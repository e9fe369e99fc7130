//! Question answering: polarity, evidence, then the scorer fallback chain.
//!
//! ```text
//! validate ─► polarity + keywords ─► gather(question) ─► exact ──decided──► answer
//!                     │                                    │
//!                     │                               tied/all-zero
//!                     │                                    ▼
//!                     │                                 keyword ─────────► answer
//!                     └─► cross-evidence (concurrent, reported only)
//! ```

use std::time::Instant;

use serde::Serialize;

use crate::config::AnswerConfig;
use crate::error::{AnswerError, Result};
use crate::evidence::{EvidenceGatherer, Fetcher, Searcher};
use crate::keywords::{KeywordExtractor, StopwordExtractor};
use crate::normalize::normalize;
use crate::polarity::Polarity;
use crate::scoring::cross::{self, CrossScore};
use crate::scoring::exact::{self, ExactScore};
use crate::scoring::keyword::{self, KeywordScore};
use crate::web::{WebFetcher, WebSearcher};

/// Scorer whose result became the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Exact,
    Keyword,
}

/// Everything one run computed, for logging or `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerReport {
    pub question: String,
    pub polarity: Polarity,
    pub keywords: Vec<String>,
    pub query: String,
    /// URLs whose text was scored, in search order.
    pub urls: Vec<String>,
    pub exact: ExactScore,
    /// Present only when the exact method was inconclusive.
    pub keyword: Option<KeywordScore>,
    /// Independent third opinion; never overrides `answer`.
    pub cross_check: Option<CrossScore>,
    pub method: Method,
    pub answer: String,
    pub elapsed_ms: u64,
}

/// Answers multiple-choice questions from web evidence.
pub struct Solver<S, F, K = StopwordExtractor> {
    searcher: S,
    fetcher: F,
    extractor: K,
    config: AnswerConfig,
}

impl Solver<WebSearcher, WebFetcher> {
    /// Solver over live web search with the default keyword extractor.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Config`] if `config` is invalid.
    pub fn web(config: AnswerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            WebSearcher::new(config.search.clone()),
            WebFetcher::new(config.search.clone()),
            StopwordExtractor,
            config,
        ))
    }
}

impl<S: Searcher, F: Fetcher, K: KeywordExtractor> Solver<S, F, K> {
    pub fn new(searcher: S, fetcher: F, extractor: K, config: AnswerConfig) -> Self {
        Self {
            searcher,
            fetcher,
            extractor,
            config,
        }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Pick one of `answers` for `question`.
    ///
    /// Returns the lowercased, punctuation-stripped answer when the exact
    /// method decides, otherwise the answer as supplied.
    ///
    /// # Errors
    ///
    /// See [`Self::answer_with_report`].
    pub async fn answer_question<A: AsRef<str>>(
        &self,
        question: &str,
        answers: &[A],
    ) -> Result<String> {
        Ok(self.answer_with_report(question, answers).await?.answer)
    }

    /// Like [`Self::answer_question`] but returns the full [`AnswerReport`].
    ///
    /// # Errors
    ///
    /// - [`AnswerError::Config`] for an empty question, an empty answer set,
    ///   a blank answer, or an invalid config; raised before any I/O.
    /// - [`AnswerError::Search`] / [`AnswerError::Fetch`] when gathering
    ///   evidence for the question fails. Cross-evidence failures are logged
    ///   and leave `cross_check` empty.
    pub async fn answer_with_report<A: AsRef<str>>(
        &self,
        question: &str,
        answers: &[A],
    ) -> Result<AnswerReport> {
        let started = Instant::now();
        self.config.validate()?;
        validate_input(question, answers)?;

        let polarity = Polarity::of(question);
        let keywords = self.extractor.extract(question);
        let query = if keywords.is_empty() {
            normalize(question).trim().to_owned()
        } else {
            keywords.join(" ")
        };
        tracing::info!(?polarity, %query, answers = answers.len(), "answering question");

        let gatherer = EvidenceGatherer::new(&self.searcher, &self.fetcher, &self.config);
        let cross_check = async {
            if !self.config.cross_check {
                return None;
            }
            let outcome = cross::score(
                &gatherer,
                &keywords,
                answers,
                self.config.answer_results,
                polarity,
            )
            .await;
            match outcome {
                Ok(score) => {
                    tracing::info!(answer = %score.answer, "cross-evidence check");
                    Some(score)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "cross-evidence check failed");
                    None
                }
            }
        };
        let (texts, cross_check) = tokio::join!(
            gatherer.gather(&query, self.config.question_results),
            cross_check
        );
        let texts = texts?;
        tracing::debug!(pages = texts.len(), "question evidence gathered");

        let exact = exact::score(&texts, answers, polarity)?;
        let (method, answer, keyword) = match exact.verdict.answer() {
            Some(answer) => (Method::Exact, answer.to_owned(), None),
            None => {
                tracing::info!(verdict = ?exact.verdict, "exact method inconclusive, falling back");
                let scored = keyword::score(&texts, answers, polarity, &self.extractor)?;
                (Method::Keyword, scored.answer.clone(), Some(scored))
            }
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(%answer, ?method, elapsed_ms, "question answered");

        Ok(AnswerReport {
            question: question.to_owned(),
            polarity,
            keywords,
            query,
            urls: texts.into_iter().map(|t| t.url).collect(),
            exact,
            keyword,
            cross_check,
            method,
            answer,
            elapsed_ms,
        })
    }
}

/// Reject input that cannot be scored, before any network I/O.
fn validate_input<A: AsRef<str>>(question: &str, answers: &[A]) -> Result<()> {
    if question.trim().is_empty() {
        return Err(AnswerError::Config("question is empty".into()));
    }
    if answers.is_empty() {
        return Err(AnswerError::Config("answer set is empty".into()));
    }
    if let Some(position) = answers.iter().position(|a| a.as_ref().trim().is_empty()) {
        return Err(AnswerError::Config(format!("answer {} is empty", position + 1)));
    }
    Ok(())
}
