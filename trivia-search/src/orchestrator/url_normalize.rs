//! Canonical URL form used as the deduplication key.

use url::Url;

/// Query parameters that identify a referral, not a page.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ref",
];

/// Canonicalise `raw` so that the same page reached through different links
/// yields the same string.
///
/// Drops the fragment, default ports, tracking parameters and a trailing
/// path slash, and sorts the remaining query pairs. Scheme and host are
/// lowercased by the parser. Unparseable input is returned unchanged.
///
/// ```
/// use trivia_search::orchestrator::url_normalize::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://EN.Wikipedia.org/wiki/Paris/?utm_source=x#History"),
///     normalize_url("https://en.wikipedia.org/wiki/Paris"),
/// );
/// ```
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_owned();
    };

    parsed.set_fragment(None);
    if matches!(
        (parsed.scheme(), parsed.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = parsed.set_port(None);
    }

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();
    if params.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&params);
    }

    let path = parsed.path().to_owned();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(path.trim_end_matches('/'));
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_host_but_not_path() {
        assert_eq!(
            normalize_url("HTTPS://Example.COM/Wiki/Paris"),
            "https://example.com/Wiki/Paris"
        );
    }

    #[test]
    fn strips_trailing_slash_except_root() {
        assert_eq!(normalize_url("https://a.test/page/"), "https://a.test/page");
        assert_eq!(normalize_url("https://a.test/"), "https://a.test/");
    }

    #[test]
    fn strips_default_ports_only() {
        assert_eq!(normalize_url("http://a.test:80/x"), "http://a.test/x");
        assert_eq!(normalize_url("https://a.test:443/x"), "https://a.test/x");
        assert_eq!(normalize_url("https://a.test:8443/x"), "https://a.test:8443/x");
    }

    #[test]
    fn sorts_query_and_drops_tracking() {
        assert_eq!(
            normalize_url("https://a.test/s?z=1&utm_source=feed&a=2&fbclid=x"),
            "https://a.test/s?a=2&z=1"
        );
    }

    #[test]
    fn tracking_only_query_removed() {
        assert_eq!(
            normalize_url("https://a.test/s?utm_campaign=c&gclid=g"),
            "https://a.test/s"
        );
    }

    #[test]
    fn drops_fragment() {
        assert_eq!(normalize_url("https://a.test/p#top"), "https://a.test/p");
    }

    #[test]
    fn invalid_input_unchanged() {
        assert_eq!(normalize_url("not a url"), "not a url");
        assert_eq!(normalize_url(""), "");
    }
}
