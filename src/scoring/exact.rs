//! Method 1: count whole-answer occurrences.
//!
//! Answers are punctuation-stripped and lowercased, page text is lowercased,
//! so matching is case-insensitive. The result is inconclusive when nothing
//! matched or when the winning count is shared.

use serde::Serialize;

use super::{ScoreTable, count_whole_word, require_answers};
use crate::error::Result;
use crate::normalize::normalize;
use crate::polarity::Polarity;

/// Outcome of the exact-occurrence method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "answer", rename_all = "snake_case")]
pub enum ExactVerdict {
    /// One answer holds the winning count; carries its lowercased form.
    Unique(String),
    /// Two or more answers share the winning count.
    Tied,
    /// No answer occurred anywhere.
    AllZero,
}

impl ExactVerdict {
    /// The decided answer, or `None` when the caller must fall back.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Unique(answer) => Some(answer),
            Self::Tied | Self::AllZero => None,
        }
    }
}

/// Table and verdict from one exact-occurrence pass.
#[derive(Debug, Clone, Serialize)]
pub struct ExactScore {
    pub counts: ScoreTable,
    pub verdict: ExactVerdict,
}

/// Score `answers` by exact occurrences across `texts`.
///
/// # Errors
///
/// Returns [`crate::AnswerError::Scoring`] if `answers` is empty.
pub fn score<T, A>(texts: &[T], answers: &[A], polarity: Polarity) -> Result<ExactScore>
where
    T: AsRef<str>,
    A: AsRef<str>,
{
    require_answers(answers)?;

    let lowered: Vec<String> = texts.iter().map(|t| t.as_ref().to_lowercase()).collect();
    // Answers equal after lowercasing share one entry.
    let mut counts = ScoreTable::default();
    for answer in answers {
        let key = normalize(answer.as_ref()).to_lowercase();
        if counts.get(&key).is_some() {
            continue;
        }
        let count: u64 = lowered.iter().map(|text| count_whole_word(text, &key)).sum();
        counts.push(key, count);
    }

    let verdict = if counts.all_zero() {
        ExactVerdict::AllZero
    } else if counts.leader_count(polarity) > 1 {
        ExactVerdict::Tied
    } else {
        counts
            .first_best(polarity)
            .map_or(ExactVerdict::AllZero, |answer| ExactVerdict::Unique(answer.to_owned()))
    };

    tracing::debug!(counts = ?counts.entries(), ?verdict, "exact occurrence scores");
    Ok(ExactScore { counts, verdict })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnswerError;

    #[test]
    fn reverse_picks_minimum() {
        let texts = ["the capital of france is paris paris paris", "berlin is a city"];
        let result = score(&texts, &["Paris", "Berlin"], Polarity::Least).expect("score");
        assert_eq!(result.counts.get("paris"), Some(3));
        assert_eq!(result.counts.get("berlin"), Some(1));
        assert_eq!(result.verdict, ExactVerdict::Unique("berlin".into()));
    }

    #[test]
    fn unique_maximum_wins() {
        let texts = ["jupiter is big", "jupiter has moons", "saturn has rings"];
        let result = score(&texts, &["Jupiter", "Saturn", "Mars"], Polarity::Most).expect("score");
        assert_eq!(result.verdict.answer(), Some("jupiter"));
    }

    #[test]
    fn tie_for_maximum_is_inconclusive() {
        let texts = ["mercury and venus", "venus then mercury"];
        let result = score(&texts, &["Mercury", "Venus", "Earth"], Polarity::Most).expect("score");
        assert_eq!(result.verdict, ExactVerdict::Tied);
        assert_eq!(result.verdict.answer(), None);
    }

    #[test]
    fn no_occurrences_is_inconclusive() {
        let texts = ["nothing relevant here"];
        let result = score(&texts, &["a", "b"], Polarity::Most).expect("score");
        assert_eq!(result.counts.total(), 0);
        assert_eq!(result.verdict, ExactVerdict::AllZero);
    }

    #[test]
    fn no_texts_is_inconclusive() {
        let texts: [&str; 0] = [];
        let result = score(&texts, &["Paris", "Berlin"], Polarity::Least).expect("score");
        assert_eq!(result.verdict, ExactVerdict::AllZero);
    }

    #[test]
    fn matching_ignores_case_and_answer_punctuation() {
        let texts = ["Guns N Roses played; GUNS N ROSES again", "the who"];
        let result =
            score(&texts, &["Guns N' Roses", "The Who"], Polarity::Most).expect("score");
        assert_eq!(result.counts.get("guns n roses"), Some(2));
        assert_eq!(result.verdict.answer(), Some("guns n roses"));
    }

    #[test]
    fn reverse_with_a_zero_still_decides() {
        let texts = ["oxygen oxygen", "hydrogen"];
        let result =
            score(&texts, &["Oxygen", "Hydrogen", "Neon"], Polarity::Least).expect("score");
        assert_eq!(result.verdict.answer(), Some("neon"));
    }

    #[test]
    fn answers_equal_after_lowercasing_share_one_entry() {
        let texts = ["paris paris berlin"];
        let result =
            score(&texts, &["Paris", "paris!", "Berlin"], Polarity::Most).expect("score");
        assert_eq!(result.counts.entries().len(), 2);
        assert_eq!(result.counts.get("paris"), Some(2));
        assert_eq!(result.verdict, ExactVerdict::Unique("paris".into()));
    }

    #[test]
    fn empty_answer_set_is_an_error() {
        let answers: [&str; 0] = [];
        let err = score(&["text"], &answers, Polarity::Most).unwrap_err();
        assert!(matches!(err, AnswerError::Scoring(_)));
    }
}
