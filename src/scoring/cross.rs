//! Method 3: search each answer on its own and count the question's keywords
//! in what comes back.

use serde::Serialize;

use super::{ScoreTable, count_whole_word, require_answers};
use crate::error::{AnswerError, Result};
use crate::evidence::{EvidenceGatherer, Fetcher, Searcher};
use crate::polarity::Polarity;

/// Per-answer question-keyword counts and the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossScore {
    pub counts: ScoreTable,
    /// Winning answer, exactly as supplied.
    pub answer: String,
}

/// Gather `results_per_answer` pages for every answer and score them.
///
/// # Errors
///
/// Returns [`AnswerError::Scoring`] for an empty answer list and propagates
/// gathering failures.
pub async fn score<S, F, A>(
    gatherer: &EvidenceGatherer<'_, S, F>,
    question_keywords: &[String],
    answers: &[A],
    results_per_answer: usize,
    polarity: Polarity,
) -> Result<CrossScore>
where
    S: Searcher,
    F: Fetcher,
    A: AsRef<str>,
{
    require_answers(answers)?;
    let queries: Vec<String> = answers.iter().map(|a| a.as_ref().to_owned()).collect();
    let groups = gatherer.gather_many(&queries, results_per_answer).await?;
    score_groups(&groups, question_keywords, answers, polarity)
}

/// Score pre-gathered text groups; `groups[i]` belongs to `answers[i]`.
///
/// An answer whose group is empty scores 0.
///
/// # Errors
///
/// Returns [`AnswerError::Scoring`] if `answers` is empty or the group count
/// does not match the answer count.
pub fn score_groups<T, A>(
    groups: &[Vec<T>],
    question_keywords: &[String],
    answers: &[A],
    polarity: Polarity,
) -> Result<CrossScore>
where
    T: AsRef<str>,
    A: AsRef<str>,
{
    require_answers(answers)?;
    if groups.len() != answers.len() {
        return Err(AnswerError::Scoring(format!(
            "{} evidence groups for {} answers",
            groups.len(),
            answers.len()
        )));
    }

    let counts: ScoreTable = answers
        .iter()
        .zip(groups)
        .map(|(answer, texts)| {
            let count: u64 = texts
                .iter()
                .flat_map(|text| {
                    question_keywords
                        .iter()
                        .map(move |keyword| count_whole_word(text.as_ref(), keyword))
                })
                .sum();
            (answer.as_ref().to_owned(), count)
        })
        .collect();

    let answer = counts
        .first_best(polarity)
        .map(str::to_owned)
        .ok_or_else(|| AnswerError::Scoring("cross-evidence table is empty".into()))?;

    tracing::debug!(counts = ?counts.entries(), %answer, "cross-evidence scores");
    Ok(CrossScore { counts, answer })
}
