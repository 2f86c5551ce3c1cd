use std::time::Duration;

use async_trait::async_trait;

use mockview_core::model::{CompletedInterview, Difficulty, EndReason, Report, SkillScore};

use crate::error::ReportError;

#[async_trait]
pub trait ReportProvider: Send + Sync {
    async fn evaluate(&self, interview: &CompletedInterview) -> Result<Report, ReportError>;
}

/// Scores an interview from its configuration and transcript alone.
///
/// The same interview always produces the same report.
#[derive(Clone, Debug, Default)]
pub struct MockReportProvider {
    latency: Duration,
}

impl MockReportProvider {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

fn base_score(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 70,
        Difficulty::Medium => 62,
        Difficulty::Hard => 55,
    }
}

fn clamp_score(value: u32) -> u8 {
    u8::try_from(value.min(100)).unwrap_or(100)
}

fn score_interview(interview: &CompletedInterview) -> (Vec<SkillScore>, Vec<String>, Vec<String>) {
    let base = base_score(interview.config.difficulty);
    let answers: Vec<&str> = interview
        .candidate_messages()
        .map(|message| message.text.as_str())
        .collect();
    let answer_count = u32::try_from(answers.len()).unwrap_or(u32::MAX);
    let total_words: usize = answers
        .iter()
        .map(|answer| answer.split_whitespace().count())
        .sum();
    let avg_words = u32::try_from(total_words / answers.len().max(1)).unwrap_or(u32::MAX);

    let half_time = interview.config.duration_secs() / 2;
    let ended_early =
        interview.reason == EndReason::UserEnded && interview.elapsed_secs < half_time;

    let communication = if answers.is_empty() {
        20
    } else {
        base + (avg_words / 4).min(25)
    };
    let problem_solving = if answers.is_empty() {
        20
    } else {
        base + answer_count.saturating_mul(4).min(25)
    };
    let time_management = if ended_early {
        base.saturating_sub(10)
    } else {
        base + 10
    };

    let skills = vec![
        SkillScore {
            name: "Communication".into(),
            score: clamp_score(communication),
            comment: format!("Average answer length was {avg_words} words."),
        },
        SkillScore {
            name: "Problem solving".into(),
            score: clamp_score(problem_solving),
            comment: format!("You answered {answer_count} question(s)."),
        },
        SkillScore {
            name: "Time management".into(),
            score: clamp_score(time_management),
            comment: if ended_early {
                "You ended the interview before the halfway mark.".into()
            } else {
                "You used the allotted time.".into()
            },
        },
    ];

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    if avg_words >= 40 {
        strengths.push("Answers were detailed and well developed.".to_string());
    } else {
        improvements.push("Expand on your answers with concrete examples.".to_string());
    }
    if answer_count >= 3 {
        strengths.push("You kept the conversation moving.".to_string());
    } else {
        improvements.push("Try to address every question the interviewer asks.".to_string());
    }
    if ended_early {
        improvements.push("Stay for the full interview to practise pacing.".to_string());
    }

    (skills, strengths, improvements)
}

#[async_trait]
impl ReportProvider for MockReportProvider {
    async fn evaluate(&self, interview: &CompletedInterview) -> Result<Report, ReportError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let (skills, strengths, improvements) = score_interview(interview);
        let report = Report::new(
            interview.config.employer.name,
            interview.config.difficulty,
            skills,
            interview.transcript.clone(),
            strengths,
            improvements,
            interview.completed_at,
        )?;
        tracing::info!(
            employer = interview.config.employer.slug,
            overall = report.overall_score(),
            "report generated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::employer_by_slug;
    use mockview_core::model::{ChatMessage, InterviewConfig, Modality, Speaker};
    use mockview_core::time::fixed_now;

    fn interview(reason: EndReason, elapsed_secs: u32, answers: &[&str]) -> CompletedInterview {
        let employer = employer_by_slug("stripe").unwrap().clone();
        CompletedInterview {
            config: InterviewConfig {
                difficulty: Difficulty::Medium,
                duration_minutes: 30,
                modality: Modality::Chat,
                camera_enabled: false,
                mic_enabled: false,
                employer,
            },
            reason,
            elapsed_secs,
            transcript: answers
                .iter()
                .map(|text| ChatMessage {
                    speaker: Speaker::Candidate,
                    text: (*text).to_string(),
                    at_secs: 0,
                })
                .collect(),
            started_at: fixed_now(),
            completed_at: fixed_now(),
        }
    }

    #[tokio::test]
    async fn same_interview_same_report() {
        let provider = MockReportProvider::default();
        let done = interview(EndReason::TimerExpired, 1800, &["I would use a hash map."]);
        let first = provider.evaluate(&done).await.unwrap();
        let second = provider.evaluate(&done).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.employer(), "Stripe");
    }

    #[tokio::test]
    async fn ending_early_costs_time_management() {
        let provider = MockReportProvider::default();
        let early = provider
            .evaluate(&interview(EndReason::UserEnded, 60, &[]))
            .await
            .unwrap();
        let full = provider
            .evaluate(&interview(EndReason::TimerExpired, 1800, &[]))
            .await
            .unwrap();
        assert!(early.overall_score() < full.overall_score());
        assert!(early
            .improvements()
            .iter()
            .any(|line| line.contains("full interview")));
    }
}
