use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ProblemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// A read-only catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub number: u32,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    /// Problem statement in markdown.
    pub content: &'static str,
}

impl Problem {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.number.to_string() == query
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Progress on a problem, derived from its stored history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProblemStatus {
    #[default]
    Todo,
    Attempted,
    Solved,
}

impl ProblemStatus {
    pub const ALL: [Self; 3] = [Self::Todo, Self::Attempted, Self::Solved];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Attempted => "Attempted",
            Self::Solved => "Solved",
        }
    }

    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// One submission recorded against a problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub language: String,
    pub passed: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Per-problem history blob kept in the session store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemHistory {
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl ProblemHistory {
    pub fn push(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    #[must_use]
    pub fn status(&self) -> ProblemStatus {
        if self.attempts.iter().any(|attempt| attempt.passed) {
            ProblemStatus::Solved
        } else if self.attempts.is_empty() {
            ProblemStatus::Todo
        } else {
            ProblemStatus::Attempted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn attempt(passed: bool) -> Attempt {
        Attempt {
            language: "rust".into(),
            passed,
            submitted_at: fixed_now(),
        }
    }

    #[test]
    fn status_follows_attempts() {
        let mut history = ProblemHistory::default();
        assert_eq!(history.status(), ProblemStatus::Todo);

        history.push(attempt(false));
        assert_eq!(history.status(), ProblemStatus::Attempted);

        history.push(attempt(true));
        history.push(attempt(false));
        assert_eq!(history.status(), ProblemStatus::Solved);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!(Difficulty::from_label(" medium "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_label("All"), None);
    }
}
