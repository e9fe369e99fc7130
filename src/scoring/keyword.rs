//! Method 2: count occurrences of each answer's keywords.
//!
//! Keywords keep their case and are matched case-sensitively. This method
//! always commits to an answer: ties, including all-zero, go to the first
//! tied answer in the supplied order.

use serde::Serialize;

use super::{ScoreTable, count_whole_word, require_answers};
use crate::error::{AnswerError, Result};
use crate::keywords::KeywordExtractor;
use crate::polarity::Polarity;

/// Per-keyword tables and per-answer totals from one keyword pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScore {
    /// `(answer, keyword counts)` in answer order.
    pub per_keyword: Vec<(String, ScoreTable)>,
    /// Sum of each answer's keyword counts.
    pub totals: ScoreTable,
    /// Winning answer, exactly as supplied.
    pub answer: String,
}

/// Score `answers` by keyword occurrences across `texts`.
///
/// # Errors
///
/// Returns [`AnswerError::Scoring`] if `answers` is empty.
pub fn score<T, A, K>(
    texts: &[T],
    answers: &[A],
    polarity: Polarity,
    extractor: &K,
) -> Result<KeywordScore>
where
    T: AsRef<str>,
    A: AsRef<str>,
    K: KeywordExtractor + ?Sized,
{
    require_answers(answers)?;

    let per_keyword: Vec<(String, ScoreTable)> = answers
        .iter()
        .map(|answer| {
            let counts = extractor
                .extract(answer.as_ref())
                .into_iter()
                .map(|keyword| {
                    let count: u64 = texts
                        .iter()
                        .map(|text| count_whole_word(text.as_ref(), &keyword))
                        .sum();
                    (keyword, count)
                })
                .collect();
            (answer.as_ref().to_owned(), counts)
        })
        .collect();

    let totals: ScoreTable = per_keyword
        .iter()
        .map(|(answer, counts)| (answer.clone(), counts.total()))
        .collect();
    let answer = totals
        .first_best(polarity)
        .map(str::to_owned)
        .ok_or_else(|| AnswerError::Scoring("keyword totals are empty".into()))?;

    tracing::debug!(totals = ?totals.entries(), %answer, "keyword occurrence scores");
    Ok(KeywordScore {
        per_keyword,
        totals,
        answer,
    })
}
