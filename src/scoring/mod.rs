//! Answer scorers and the score table they share.
//!
//! - [`exact`]: whole-answer occurrence counts, may be inconclusive.
//! - [`keyword`]: answer-keyword occurrence counts, always decides.
//! - [`cross`]: question-keyword counts in each answer's own search results.
//!
//! Every scorer builds a fresh table covering every supplied answer, picks
//! the extreme for the question's [`Polarity`], and drops the table.

pub mod cross;
pub mod exact;
pub mod keyword;

use serde::{Serialize, Serializer};

use crate::error::{AnswerError, Result};
use crate::polarity::Polarity;

/// Count occurrences of `term` in `text` delimited by a space (`' '`) or the
/// ends of the text. Matching is case-sensitive; callers lowercase both sides
/// for case-insensitive counts.
///
/// Tabs and newlines are not boundaries. Fetched page text has its
/// whitespace collapsed to single spaces before it gets here.
///
/// ```
/// use trivia::scoring::count_whole_word;
///
/// assert_eq!(count_whole_word("paris paris parisian paris", "paris"), 3);
/// assert_eq!(count_whole_word("new york is in new york state", "new york"), 2);
/// ```
pub fn count_whole_word(text: &str, term: &str) -> u64 {
    if term.trim().is_empty() {
        return 0;
    }
    text.match_indices(term)
        .filter(|&(start, _)| {
            let before = text[..start].chars().next_back();
            let after = text[start + term.len()..].chars().next();
            before.is_none_or(|c| c == ' ') && after.is_none_or(|c| c == ' ')
        })
        .count() as u64
}

/// Per-answer counts in answer order.
///
/// Order is significant: ties resolve to the earliest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<(String, u64)>,
}

impl ScoreTable {
    pub fn push(&mut self, key: impl Into<String>, count: u64) {
        self.entries.push((key.into(), count));
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.iter().find(|(k, _)| k == key).map(|&(_, c)| c)
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// The winning count: maximum, or minimum for [`Polarity::Least`].
    pub fn best_count(&self, polarity: Polarity) -> Option<u64> {
        let counts = self.entries.iter().map(|&(_, c)| c);
        match polarity {
            Polarity::Most => counts.max(),
            Polarity::Least => counts.min(),
        }
    }

    /// Number of entries attaining [`Self::best_count`].
    pub fn leader_count(&self, polarity: Polarity) -> usize {
        self.best_count(polarity).map_or(0, |best| {
            self.entries.iter().filter(|&&(_, c)| c == best).count()
        })
    }

    /// First entry attaining the best count.
    pub fn first_best(&self, polarity: Polarity) -> Option<&str> {
        let best = self.best_count(polarity)?;
        self.entries
            .iter()
            .find(|&&(_, c)| c == best)
            .map(|(key, _)| key.as_str())
    }

    pub fn all_zero(&self) -> bool {
        self.entries.iter().all(|&(_, c)| c == 0)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, c)| (k, c)))
    }
}

/// Reject an empty answer list before building a table.
pub(crate) fn require_answers<A>(answers: &[A]) -> Result<()> {
    if answers.is_empty() {
        return Err(AnswerError::Scoring("no answers to score".into()));
    }
    Ok(())
}
