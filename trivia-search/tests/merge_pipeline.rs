//! Merge behaviour over synthetic engine output (no network).

use trivia_search::orchestrator::merge::merge_ranked;
use trivia_search::{SearchEngine, SearchHit};

fn hits(engine: SearchEngine, urls: &[&str]) -> Vec<SearchHit> {
    urls.iter()
        .enumerate()
        .map(|(rank, url)| SearchHit {
            url: (*url).to_string(),
            title: format!("{engine} #{rank}"),
            engine,
            rank,
        })
        .collect()
}

#[test]
fn merged_list_has_no_duplicate_pages() {
    let ddg = hits(
        SearchEngine::DuckDuckGo,
        &[
            "https://en.wikipedia.org/wiki/Mount_Everest",
            "https://www.nationalgeographic.com/everest",
            "https://www.britannica.com/place/Mount-Everest?utm_source=ddg",
        ],
    );
    let bing = hits(
        SearchEngine::Bing,
        &[
            "https://en.wikipedia.org/wiki/Mount_Everest/",
            "https://www.britannica.com/place/Mount-Everest",
            "https://www.himalayanwonders.com/everest",
        ],
    );

    let merged = merge_ranked(vec![ddg, bing], 5);
    let urls: Vec<&str> = merged.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://en.wikipedia.org/wiki/Mount_Everest",
            "https://www.nationalgeographic.com/everest",
            "https://www.britannica.com/place/Mount-Everest",
            "https://www.himalayanwonders.com/everest",
        ]
    );
    assert_eq!(merged[2].engine, SearchEngine::Bing);
}

#[test]
fn single_engine_order_is_preserved() {
    let bing = hits(SearchEngine::Bing, &["https://a.test", "https://b.test", "https://c.test"]);
    let merged = merge_ranked(vec![bing], 3);
    let urls: Vec<&str> = merged.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.test", "https://b.test", "https://c.test"]);
}
