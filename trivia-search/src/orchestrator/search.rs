//! Concurrent multi-engine search.

use crate::config::SearchConfig;
use crate::engine::SearchEngineTrait;
use crate::engines::{BingEngine, DuckDuckGoEngine};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchHit};

use super::merge::merge_ranked;

/// Query every engine in `config.engines` concurrently and merge the hits.
///
/// Failed engines are logged at warn and left out of the merge.
///
/// # Errors
///
/// Returns [`SearchError::AllEnginesFailed`] when every engine errored. An
/// engine that answers with zero hits counts as a success.
pub async fn orchestrate_search(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>, SearchError> {
    let queries = config.engines.iter().map(|&engine| async move {
        let outcome = query_engine(engine, query, config).await;
        (engine, outcome)
    });
    let outcomes = futures::future::join_all(queries).await;

    let mut per_engine = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for (engine, outcome) in outcomes {
        match outcome {
            Ok(hits) => {
                tracing::debug!(%engine, count = hits.len(), "engine returned hits");
                per_engine.push(hits);
            }
            Err(err) => {
                tracing::warn!(%engine, error = %err, "engine query failed");
                errors.push(format!("{engine}: {err}"));
            }
        }
    }

    if per_engine.is_empty() {
        return Err(SearchError::AllEnginesFailed(errors.join("; ")));
    }

    Ok(merge_ranked(per_engine, config.max_results))
}

async fn query_engine(
    engine: SearchEngine,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>, SearchError> {
    match engine {
        SearchEngine::DuckDuckGo => run_engine(&DuckDuckGoEngine, query, config).await,
        SearchEngine::Bing => run_engine(&BingEngine, query, config).await,
    }
}

async fn run_engine<E: SearchEngineTrait>(
    engine: &E,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>, SearchError> {
    tracing::trace!(engine = %engine.engine_type(), query, "querying engine");
    engine.search(query, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneHit;

    impl SearchEngineTrait for OneHit {
        async fn search(
            &self,
            query: &str,
            _config: &SearchConfig,
        ) -> Result<Vec<SearchHit>, SearchError> {
            Ok(vec![SearchHit {
                url: format!("https://example.com/{query}"),
                title: query.to_owned(),
                engine: self.engine_type(),
                rank: 0,
            }])
        }

        fn engine_type(&self) -> SearchEngine {
            SearchEngine::DuckDuckGo
        }
    }

    #[tokio::test]
    async fn run_engine_passes_hits_through() {
        let hits = run_engine(&OneHit, "moon", &SearchConfig::default())
            .await
            .expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://example.com/moon");
        assert_eq!(hits[0].engine, SearchEngine::DuckDuckGo);
    }

    #[tokio::test]
    #[ignore] // Live network test, run with `cargo test -- --ignored`
    async fn live_search_merges_engines() {
        let config = SearchConfig::default().with_max_results(5);
        let hits = orchestrate_search("tallest mountain in the world", &config)
            .await
            .expect("live search");
        assert!(!hits.is_empty());
        assert!(hits.len() <= 5);
    }
}
