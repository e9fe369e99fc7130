//! DuckDuckGo via `https://html.duckduckgo.com/html/`, which needs no
//! JavaScript and wraps result links in a `/l/?uddg=` redirect.

use scraper::Html;
use url::Url;

use super::selector;
use crate::config::SearchConfig;
use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http;
use crate::types::{SearchEngine, SearchHit};

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML scraper.
pub struct DuckDuckGoEngine;

impl SearchEngineTrait for DuckDuckGoEngine {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchHit>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

        let client = http::build_client(config)?;
        let mut form = vec![("q", query)];
        if config.safe_search {
            form.push(("kp", "1"));
        }

        let html = client
            .post(ENDPOINT)
            .form(&form)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo request", e))?
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo status", e))?
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo body", e))?;

        parse_results(&html, config.max_results)
    }

    fn engine_type(&self) -> SearchEngine {
        SearchEngine::DuckDuckGo
    }
}

/// Resolve a result anchor's `href`, unwrapping the `uddg` redirect.
fn resolve_href(href: &str) -> Option<String> {
    let absolute = match href.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => href.to_owned(),
    };
    let parsed = Url::parse(&absolute).ok()?;

    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && parsed.path().starts_with("/l/");
    if !is_redirect {
        return Some(absolute);
    }
    parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, target)| target.into_owned())
}

/// Parse organic (non-ad) results from a DuckDuckGo HTML page.
pub(crate) fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);
    let result_sel = selector(".result:not(.result--ad)")?;
    let link_sel = selector("a.result__a")?;

    let hits: Vec<SearchHit> = document
        .select(&result_sel)
        .filter_map(|result| {
            let link = result.select(&link_sel).next()?;
            let title = link.text().collect::<String>().trim().to_owned();
            let url = resolve_href(link.value().attr("href")?)?;
            (!title.is_empty()).then_some((url, title))
        })
        .take(max_results)
        .enumerate()
        .map(|(rank, (url, title))| SearchHit {
            url,
            title,
            engine: SearchEngine::DuckDuckGo,
            rank,
        })
        .collect();

    tracing::debug!(count = hits.len(), "DuckDuckGo results parsed");
    Ok(hits)
}
