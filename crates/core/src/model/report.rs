use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{ChatMessage, Difficulty};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("score {score} for {skill} is out of range (0..=100)")]
    ScoreOutOfRange { skill: String, score: u8 },

    #[error("a report needs at least one skill score")]
    NoSkills,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillScore {
    pub name: String,
    pub score: u8,
    pub comment: String,
}

/// Evaluation of a completed interview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    employer: String,
    difficulty: Difficulty,
    skills: Vec<SkillScore>,
    transcript: Vec<ChatMessage>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    completed_at: DateTime<Utc>,
}

impl Report {
    /// Build a report, validating every skill score.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoSkills` if `skills` is empty, or
    /// `ReportError::ScoreOutOfRange` for any score above 100.
    pub fn new(
        employer: impl Into<String>,
        difficulty: Difficulty,
        skills: Vec<SkillScore>,
        transcript: Vec<ChatMessage>,
        strengths: Vec<String>,
        improvements: Vec<String>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ReportError> {
        if skills.is_empty() {
            return Err(ReportError::NoSkills);
        }
        if let Some(bad) = skills.iter().find(|skill| skill.score > 100) {
            return Err(ReportError::ScoreOutOfRange {
                skill: bad.name.clone(),
                score: bad.score,
            });
        }

        Ok(Self {
            employer: employer.into(),
            difficulty,
            skills,
            transcript,
            strengths,
            improvements,
            completed_at,
        })
    }

    /// Mean of the skill scores, rounded down.
    #[must_use]
    pub fn overall_score(&self) -> u8 {
        let total: u32 = self.skills.iter().map(|skill| u32::from(skill.score)).sum();
        let count = u32::try_from(self.skills.len()).unwrap_or(u32::MAX).max(1);
        u8::try_from(total / count).unwrap_or(100)
    }

    #[must_use]
    pub fn employer(&self) -> &str {
        &self.employer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillScore] {
        &self.skills
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    #[must_use]
    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
