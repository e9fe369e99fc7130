//! Trait implemented by each scraped search engine.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchHit};

/// A scraped search backend.
///
/// Implementations build the request, send it with [`crate::http::build_client`],
/// and parse organic results into [`SearchHit`]s ranked from zero. At most
/// `config.max_results` hits are returned.
pub trait SearchEngineTrait: Send + Sync {
    /// Run `query` against this engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport failure, non-success status, or
    /// unparseable markup. An empty result page is `Ok(vec![])`.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;

    /// Which engine this is.
    fn engine_type(&self) -> SearchEngine;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedEngine {
        urls: Vec<&'static str>,
    }

    impl SearchEngineTrait for CannedEngine {
        async fn search(
            &self,
            _query: &str,
            config: &SearchConfig,
        ) -> Result<Vec<SearchHit>, SearchError> {
            Ok(self
                .urls
                .iter()
                .take(config.max_results)
                .enumerate()
                .map(|(rank, url)| SearchHit {
                    url: (*url).to_owned(),
                    title: String::new(),
                    engine: SearchEngine::Bing,
                    rank,
                })
                .collect())
        }

        fn engine_type(&self) -> SearchEngine {
            SearchEngine::Bing
        }
    }

    #[tokio::test]
    async fn implementations_honour_max_results() {
        let engine = CannedEngine {
            urls: vec!["https://a.test", "https://b.test", "https://c.test"],
        };
        let config = SearchConfig::default().with_max_results(2);
        let hits = engine.search("quiz", &config).await.expect("canned search");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].rank, 1);
        assert_eq!(engine.engine_type(), SearchEngine::Bing);
    }
}
