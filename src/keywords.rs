//! Keyword extraction for questions and answers.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Turns a sentence into search/match keywords.
///
/// Implementations must be deterministic: the same input yields the same
/// keywords in the same order.
pub trait KeywordExtractor: Send + Sync {
    /// Keywords of `text`, in order of first appearance, without duplicates.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// English function words and quiz boilerplate ("which of the following").
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "following", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "one",
    "only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "whose", "why", "will", "with", "would",
    "you", "your",
];

/// Default extractor: punctuation-stripped whitespace tokens minus
/// [`STOP_WORDS`] (compared case-insensitively). Token case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordExtractor;

impl KeywordExtractor for StopwordExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let mut seen = HashSet::new();
        normalized
            .split_whitespace()
            .filter(|token| !STOP_WORDS.contains(&token.to_lowercase().as_str()))
            .filter(|token| seen.insert(*token))
            .map(str::to_owned)
            .collect()
    }
}
