//! [`Searcher`] and [`Fetcher`] backed by `trivia-search`.

use trivia_search::SearchConfig;

use crate::error::{AnswerError, Result};
use crate::evidence::{Fetcher, Searcher};

/// Scraped multi-engine web search.
#[derive(Debug, Clone)]
pub struct WebSearcher {
    config: SearchConfig,
}

impl WebSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Searcher for WebSearcher {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>> {
        let hits = trivia_search::search(query, &self.config.with_max_results(count))
            .await
            .map_err(|e| AnswerError::Search(format!("{query:?}: {e}")))?;
        Ok(hits.into_iter().map(|hit| hit.url).collect())
    }
}

/// Page download with HTML boilerplate removal.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    config: SearchConfig,
}

impl WebFetcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Fetcher for WebFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let page = trivia_search::fetch_page_content(url, &self.config)
            .await
            .map_err(|e| AnswerError::Fetch(format!("{url}: {e}")))?;
        tracing::trace!(url, words = page.word_count, "page fetched");
        Ok(page.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_failure_maps_to_fetch_error() {
        let fetcher = WebFetcher::new(SearchConfig::default());
        let err = fetcher.fetch_text("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, AnswerError::Fetch(_)));
        assert!(err.to_string().contains("ftp://example.com/file"));
    }

    #[tokio::test]
    async fn invalid_search_config_maps_to_search_error() {
        let searcher = WebSearcher::new(SearchConfig {
            engines: vec![],
            ..Default::default()
        });
        let err = searcher.search("anything", 3).await.unwrap_err();
        assert!(matches!(err, AnswerError::Search(_)));
    }

    #[tokio::test]
    #[ignore] // Live network test, run with `cargo test -- --ignored`
    async fn live_search_and_fetch() {
        let config = SearchConfig::default();
        let urls = WebSearcher::new(config.clone())
            .search("capital of France", 2)
            .await
            .expect("live search");
        assert!(!urls.is_empty() && urls.len() <= 2);
        let text = WebFetcher::new(config).fetch_text(&urls[0]).await.expect("live fetch");
        assert!(!text.is_empty());
    }
}
