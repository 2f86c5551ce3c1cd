use mockview_core::model::{ChatMessage, Report};

use crate::vm::time_fmt::{format_clock, format_datetime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillRowVm {
    pub name: String,
    pub score: u8,
    pub band: &'static str,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLineVm {
    pub speaker: &'static str,
    pub at: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub title: String,
    pub overall: u8,
    pub overall_band: &'static str,
    pub completed_at: String,
    pub skills: Vec<SkillRowVm>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub transcript: Vec<TranscriptLineVm>,
}

/// Coarse label for a 0..=100 score.
#[must_use]
pub fn score_band(score: u8) -> &'static str {
    match score {
        85..=u8::MAX => "Excellent",
        70..=84 => "Strong",
        50..=69 => "Developing",
        _ => "Needs work",
    }
}

#[must_use]
pub fn map_transcript(messages: &[ChatMessage]) -> Vec<TranscriptLineVm> {
    messages
        .iter()
        .map(|message| TranscriptLineVm {
            speaker: message.speaker.label(),
            at: format_clock(message.at_secs),
            text: message.text.clone(),
        })
        .collect()
}

#[must_use]
pub fn map_report(report: &Report) -> ReportVm {
    let overall = report.overall_score();
    ReportVm {
        title: format!("{} · {}", report.employer(), report.difficulty().label()),
        overall,
        overall_band: score_band(overall),
        completed_at: format_datetime(report.completed_at()),
        skills: report
            .skills()
            .iter()
            .map(|skill| SkillRowVm {
                name: skill.name.clone(),
                score: skill.score,
                band: score_band(skill.score),
                comment: skill.comment.clone(),
            })
            .collect(),
        strengths: report.strengths().to_vec(),
        improvements: report.improvements().to_vec(),
        transcript: map_transcript(report.transcript()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::model::{Difficulty, SkillScore, Speaker};
    use mockview_core::time::fixed_now;

    fn skill(name: &str, score: u8) -> SkillScore {
        SkillScore {
            name: name.into(),
            score,
            comment: String::new(),
        }
    }

    #[test]
    fn bands_cover_the_range() {
        assert_eq!(score_band(100), "Excellent");
        assert_eq!(score_band(84), "Strong");
        assert_eq!(score_band(50), "Developing");
        assert_eq!(score_band(0), "Needs work");
    }

    #[test]
    fn maps_scores_and_transcript() {
        let transcript = vec![ChatMessage {
            speaker: Speaker::Interviewer,
            text: "Hello".into(),
            at_secs: 61,
        }];
        let report = Report::new(
            "Stripe",
            Difficulty::Medium,
            vec![skill("Communication", 80), skill("Problem solving", 60)],
            transcript,
            vec!["Clear".into()],
            vec![],
            fixed_now(),
        )
        .unwrap();

        let vm = map_report(&report);
        assert_eq!(vm.title, "Stripe · Medium");
        assert_eq!(vm.overall, 70);
        assert_eq!(vm.overall_band, "Strong");
        assert_eq!(vm.skills[1].band, "Developing");
        assert_eq!(vm.transcript[0].at, "01:01");
        assert_eq!(vm.transcript[0].speaker, Speaker::Interviewer.label());
    }
}
