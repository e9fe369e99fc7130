//! Whether a question asks for the most- or least-supported answer.

use serde::Serialize;

/// Direction in which answer scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Highest score wins.
    Most,
    /// Lowest score wins ("NOT", "least").
    Least,
}

impl Polarity {
    /// Classify `question`.
    ///
    /// Reversed when the question contains `NOT` (exact case), or contains
    /// `least` in any case without also containing `at least`.
    pub fn of(question: &str) -> Self {
        let lower = question.to_lowercase();
        let reversed =
            question.contains("NOT") || (lower.contains("least") && !lower.contains("at least"));
        if reversed { Self::Least } else { Self::Most }
    }

    /// `true` for [`Polarity::Least`].
    pub fn is_reverse(self) -> bool {
        self == Self::Least
    }
}
