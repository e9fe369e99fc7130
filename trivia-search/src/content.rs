//! HTML to readable text.
//!
//! Text inside scripts, styles, navigation and other page chrome is dropped,
//! the main content root (`article`, `main`, `[role=main]`, then `body`) is
//! flattened, and whitespace runs collapse to single spaces so downstream
//! word matching sees one separator between tokens.

use scraper::{ElementRef, Html, Node};

use crate::error::{Result, SearchError};
use crate::types::PageText;

/// Elements whose text never counts as page content.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "nav", "header", "footer",
    "aside", "form",
];

const CONTENT_ROOTS: &[&str] = &["article", "main", "[role=\"main\"]", "body"];

/// Extract title and readable text from `html`, cut to `max_chars` bytes.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] when the page has no visible text.
pub fn extract_content(html: &str, url: &str, max_chars: usize) -> Result<PageText> {
    let document = Html::parse_document(html);

    let title = first_match(&document, "title")
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();

    let text = CONTENT_ROOTS
        .iter()
        .filter_map(|css| first_match(&document, css))
        .map(visible_text)
        .find(|text| !text.is_empty())
        .ok_or_else(|| SearchError::Parse(format!("no extractable text at {url}")))?;

    Ok(page_text(url, title, &text, max_chars))
}

/// Wrap an already-plain body (e.g. `text/plain`) as [`PageText`].
///
/// # Errors
///
/// Returns [`SearchError::Parse`] when the body is blank.
pub fn plain_content(body: &str, url: &str, max_chars: usize) -> Result<PageText> {
    let text = collapse_whitespace(body);
    if text.is_empty() {
        return Err(SearchError::Parse(format!("no extractable text at {url}")));
    }
    Ok(page_text(url, String::new(), &text, max_chars))
}

fn page_text(url: &str, title: String, text: &str, max_chars: usize) -> PageText {
    let text = truncate_at_boundary(text, max_chars).to_owned();
    PageText {
        url: url.to_owned(),
        title,
        word_count: text.split_whitespace().count(),
        text,
    }
}

fn first_match<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = scraper::Selector::parse(css).ok()?;
    document.select(&selector).next()
}

/// Text nodes under `root` that are not inside a skipped element.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut joined = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if SKIPPED_TAGS.contains(&el.name()))
        });
        if !hidden {
            joined.push(' ');
            joined.push_str(text);
        }
    }
    collapse_whitespace(&joined)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_at_boundary(text: &str, max_chars: usize) -> &str {
    if text.len() <= max_chars {
        return text;
    }
    let mut end = max_chars;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 100_000;

    #[test]
    fn extracts_title_and_body() {
        let html = "<html><head><title> Paris  facts </title></head><body><p>Paris is the capital.</p></body></html>";
        let page = extract_content(html, "https://a.test", LIMIT).expect("extract");
        assert_eq!(page.title, "Paris facts");
        assert_eq!(page.text, "Paris is the capital.");
        assert_eq!(page.word_count, 4);
        assert_eq!(page.url, "https://a.test");
    }

    #[test]
    fn prefers_article_over_body() {
        let html = r#"<html><body><div>Cookie banner</div><article>Berlin is a city</article></body></html>"#;
        let page = extract_content(html, "https://a.test", LIMIT).expect("extract");
        assert_eq!(page.text, "Berlin is a city");
    }

    #[test]
    fn drops_scripts_styles_and_chrome() {
        let html = r#"<html><body>
            <header>Site header</header>
            <nav>Home | About</nav>
            <p>Mercury is the closest planet.</p>
            <script>var planet = "Pluto";</script>
            <style>.x { color: red }</style>
            <aside>Related links</aside>
            <footer>Copyright</footer>
        </body></html>"#;
        let page = extract_content(html, "https://a.test", LIMIT).expect("extract");
        assert_eq!(page.text, "Mercury is the closest planet.");
    }

    #[test]
    fn nav_prefix_does_not_hide_similar_tags() {
        let html = "<html><body><nav>skip</nav><p>navigate the river</p></body></html>";
        let page = extract_content(html, "https://a.test", LIMIT).expect("extract");
        assert_eq!(page.text, "navigate the river");
    }

    #[test]
    fn inline_elements_keep_word_separation() {
        let html = "<html><body><p>The <b>Eiffel</b> Tower\n\n is   in <i>Paris</i></p></body></html>";
        let page = extract_content(html, "https://a.test", LIMIT).expect("extract");
        assert_eq!(page.text, "The Eiffel Tower is in Paris");
    }

    #[test]
    fn script_only_page_is_parse_error() {
        let html = "<html><body><script>alert(1)</script></body></html>";
        let err = extract_content(html, "https://a.test", LIMIT).unwrap_err();
        assert!(err.to_string().contains("no extractable text"));
    }

    #[test]
    fn truncates_on_char_boundary() {
        let body = "é".repeat(100);
        let html = format!("<html><body>{body}</body></html>");
        let page = extract_content(&html, "https://a.test", 51).expect("extract");
        assert_eq!(page.text.len(), 50);
    }

    #[test]
    fn plain_body_collapses_whitespace() {
        let page = plain_content("line one\n\nline   two", "https://a.test/t.txt", LIMIT)
            .expect("plain");
        assert_eq!(page.text, "line one line two");
        assert!(plain_content("  \n ", "https://a.test", LIMIT).is_err());
    }
}
