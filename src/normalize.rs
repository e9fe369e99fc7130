//! Punctuation stripping applied to page text and answers before matching.

/// Characters deleted by [`normalize`]: ASCII punctuation other than `/`,
/// plus the U+FFFD replacement character left by lossy decoding.
pub const STRIPPED: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '\u{FFFD}',
];

/// Remove every [`STRIPPED`] character from `text`.
///
/// Nothing is inserted in their place, so `don't` becomes the single token
/// `dont` and `well-known` becomes `wellknown`. `/` is kept.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED.contains(c)).collect()
}
