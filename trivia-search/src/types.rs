//! Search hits, engine identifiers, and fetched page text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One organic result scraped from an engine's result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result URL with engine redirect wrappers removed.
    pub url: String,
    /// Result title as shown by the engine.
    pub title: String,
    /// Engine that produced this hit.
    pub engine: SearchEngine,
    /// Zero-based position on the engine's result page.
    pub rank: usize,
}

/// Engines that can be scraped without an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// DuckDuckGo's JavaScript-free HTML endpoint.
    DuckDuckGo,
    /// Bing web results.
    Bing,
}

impl SearchEngine {
    /// Human-readable engine name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
        }
    }

    /// Every supported engine, in merge priority order.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::DuckDuckGo, Self::Bing]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Readable text extracted from a fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// URL that was requested.
    pub url: String,
    /// Contents of `<title>`, or empty.
    pub title: String,
    /// Body text with markup and boilerplate removed.
    pub text: String,
    /// Whitespace-delimited word count of `text`.
    pub word_count: usize,
}
