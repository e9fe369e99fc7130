//! Evidence gathering: search, then fetch every hit concurrently.
//!
//! The search and fetch collaborators sit behind [`Searcher`] and
//! [`Fetcher`] so the pipeline can run against the web backend in
//! [`crate::web`] or against in-memory stand-ins.

use std::future::Future;
use std::ops::Range;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::config::AnswerConfig;
use crate::error::{AnswerError, Result};
use crate::fanout::ordered_map;
use crate::normalize::normalize;

/// Resolves a query to an ordered list of result URLs.
pub trait Searcher: Send + Sync {
    /// Up to `count` distinct URLs for `query`, best first. No results is
    /// `Ok(vec![])`.
    fn search(&self, query: &str, count: usize)
    -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Downloads the raw text of a page.
pub trait Fetcher: Send + Sync {
    /// Text content of `url`, before punctuation stripping.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Punctuation-stripped text of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceText {
    pub url: String,
    pub text: String,
}

impl AsRef<str> for EvidenceText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Runs search + bounded concurrent fetch for one or many queries.
///
/// Every search and fetch holds a permit from one shared semaphore, so
/// concurrent `gather` calls on the same gatherer never exceed
/// `parallelism` calls in flight between them.
pub struct EvidenceGatherer<'a, S, F> {
    searcher: &'a S,
    fetcher: &'a F,
    parallelism: usize,
    permits: Semaphore,
    fetch_timeout: Duration,
    skip_failed_fetches: bool,
}

impl<'a, S: Searcher, F: Fetcher> EvidenceGatherer<'a, S, F> {
    pub fn new(searcher: &'a S, fetcher: &'a F, config: &AnswerConfig) -> Self {
        let parallelism = config.effective_parallelism().max(1);
        Self {
            searcher,
            fetcher,
            parallelism,
            permits: Semaphore::new(parallelism),
            fetch_timeout: Duration::from_secs(config.fetch_timeout_seconds),
            skip_failed_fetches: config.skip_failed_fetches,
        }
    }

    /// Search `query` for `count` URLs and return their texts in URL order.
    ///
    /// # Errors
    ///
    /// A search failure is always returned. A fetch failure is returned only
    /// when failed fetches are not being skipped.
    pub async fn gather(&self, query: &str, count: usize) -> Result<Vec<EvidenceText>> {
        let urls = self.search(query, count).await?;
        let fetched = self.fetch_all(&urls).await?;
        Ok(fetched.into_iter().flatten().collect())
    }

    /// Gather for several queries at once, returning one group per query.
    ///
    /// All searches run first, then every URL from every query is fetched
    /// in a single bounded fan-out. Query `i`'s texts are the fetch outputs
    /// in the `i`-th contiguous range of the flattened URL list.
    pub async fn gather_many(
        &self,
        queries: &[String],
        count: usize,
    ) -> Result<Vec<Vec<EvidenceText>>> {
        let url_lists = ordered_map(queries, self.parallelism, |query| self.search(query, count))
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let ranges = prefix_ranges(url_lists.iter().map(Vec::len));
        let urls: Vec<String> = url_lists.into_iter().flatten().collect();
        let fetched = self.fetch_all(&urls).await?;

        Ok(ranges
            .into_iter()
            .map(|range| fetched[range].iter().flatten().cloned().collect())
            .collect())
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>> {
        let _permit = self.permit().await?;
        let mut urls = self.searcher.search(query, count).await?;
        urls.truncate(count);
        tracing::trace!(query, ?urls, "search returned");
        Ok(urls)
    }

    /// Fetch every URL; slot `i` is `None` when `urls[i]` failed and was skipped.
    async fn fetch_all(&self, urls: &[String]) -> Result<Vec<Option<EvidenceText>>> {
        let outcomes = ordered_map(urls, self.parallelism, |url| self.fetch_one(url)).await;

        outcomes
            .into_iter()
            .zip(urls)
            .map(|(outcome, url)| match outcome {
                Ok(text) => Ok(Some(EvidenceText {
                    url: url.clone(),
                    text,
                })),
                Err(err) if self.skip_failed_fetches => {
                    tracing::warn!(url = %url, error = %err, "skipping page that failed to fetch");
                    Ok(None)
                }
                Err(err) => Err(err),
            })
            .collect()
    }

    async fn fetch_one(&self, url: &str) -> Result<String> {
        let _permit = self.permit().await?;
        match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch_text(url)).await {
            Ok(raw) => raw.map(|raw| normalize(&raw)),
            Err(_) => Err(AnswerError::Fetch(format!(
                "{url}: no response within {}s",
                self.fetch_timeout.as_secs()
            ))),
        }
    }

    async fn permit(&self) -> Result<SemaphorePermit<'_>> {
        self.permits
            .acquire()
            .await
            .map_err(|_| AnswerError::Config("evidence limiter closed".into()))
    }
}

/// Contiguous ranges for consecutive groups of the given lengths.
pub(crate) fn prefix_ranges(lengths: impl IntoIterator<Item = usize>) -> Vec<Range<usize>> {
    lengths
        .into_iter()
        .scan(0, |start, len| {
            let range = *start..*start + len;
            *start += len;
            Some(range)
        })
        .collect()
}
