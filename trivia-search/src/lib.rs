//! # trivia-search
//!
//! Keyless web search and page text retrieval.
//!
//! Scrapes DuckDuckGo's HTML endpoint and Bing concurrently, merges their
//! result lists by rank, removes duplicate URLs, and fetches result pages as
//! readable text. Nothing is cached between calls.

pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod types;

pub use config::SearchConfig;
pub use engine::SearchEngineTrait;
pub use error::{Result, SearchError};
pub use types::{PageText, SearchEngine, SearchHit};

/// Search every configured engine and return up to `config.max_results`
/// merged, duplicate-free hits in rank order.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config, or
/// [`SearchError::AllEnginesFailed`] if no engine answered. Zero hits is
/// `Ok(vec![])`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> trivia_search::Result<()> {
/// let config = trivia_search::SearchConfig::default().with_max_results(5);
/// for hit in trivia_search::search("largest moon of Saturn", &config).await? {
///     println!("{} {}", hit.rank, hit.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchHit>> {
    config.validate()?;
    orchestrator::search::orchestrate_search(query, config).await
}

/// Download `url` and return its readable text.
///
/// HTML bodies go through [`content::extract_content`]; other `text/*`
/// bodies are used as-is after whitespace collapsing.
///
/// # Errors
///
/// Returns [`SearchError::Http`] / [`SearchError::Timeout`] on transport or
/// status failure, and [`SearchError::Parse`] for non-text or empty pages.
pub async fn fetch_page_content(url: &str, config: &SearchConfig) -> Result<PageText> {
    config.validate()?;
    let parsed =
        url::Url::parse(url).map_err(|e| SearchError::Http(format!("invalid URL {url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SearchError::Http(format!(
            "unsupported scheme {} for {url}",
            parsed.scheme()
        )));
    }

    tracing::trace!(url, "fetching page");
    let client = http::build_client(config)?;
    let response = client
        .get(parsed)
        .header("Accept", "text/html,application/xhtml+xml,text/plain;q=0.9")
        .send()
        .await
        .map_err(|e| SearchError::from_reqwest(&format!("fetch {url}"), e))?
        .error_for_status()
        .map_err(|e| SearchError::from_reqwest(&format!("fetch {url}"), e))?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("text/html")
        .to_ascii_lowercase();
    let body = response
        .text()
        .await
        .map_err(|e| SearchError::from_reqwest(&format!("read {url}"), e))?;

    if content_type.contains("html") {
        content::extract_content(&body, url, config.max_page_chars)
    } else if content_type.starts_with("text/") {
        content::plain_content(&body, url, config.max_page_chars)
    } else {
        Err(SearchError::Parse(format!(
            "unsupported content type {content_type} at {url}"
        )))
    }
}
