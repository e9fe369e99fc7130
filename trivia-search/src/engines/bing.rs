//! Bing web results, scraped from `li.b_algo` containers.

use scraper::Html;

use super::selector;
use crate::config::SearchConfig;
use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http;
use crate::types::{SearchEngine, SearchHit};

/// Bing HTML scraper.
pub struct BingEngine;

impl SearchEngineTrait for BingEngine {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query, "Bing search");

        let client = http::build_client(config)?;
        let safe = if config.safe_search { "Strict" } else { "Off" };

        let html = client
            .get("https://www.bing.com/search")
            .query(&[("q", query), ("setlang", "en"), ("safeSearch", safe)])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("Bing request", e))?
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest("Bing status", e))?
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("Bing body", e))?;

        parse_results(&html, config.max_results)
    }

    fn engine_type(&self) -> SearchEngine {
        SearchEngine::Bing
    }
}

/// Parse `li.b_algo > h2 > a` links from a Bing result page.
fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);
    let result_sel = selector("li.b_algo")?;
    let link_sel = selector("h2 a[href]")?;

    let hits: Vec<SearchHit> = document
        .select(&result_sel)
        .filter_map(|result| {
            let link = result.select(&link_sel).next()?;
            let href = link.value().attr("href")?.trim();
            let title = link.text().collect::<String>().trim().to_owned();
            (href.starts_with("http") && !title.is_empty()).then(|| (href.to_owned(), title))
        })
        .take(max_results)
        .enumerate()
        .map(|(rank, (url, title))| SearchHit {
            url,
            title,
            engine: SearchEngine::Bing,
            rank,
        })
        .collect();

    tracing::debug!(count = hits.len(), "Bing results parsed");
    Ok(hits)
}
