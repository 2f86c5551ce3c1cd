use serde::{Deserialize, Serialize};

use crate::model::JobId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    Engineering,
    Data,
    Design,
    Product,
}

impl JobCategory {
    pub const ALL: [Self; 4] = [Self::Engineering, Self::Data, Self::Design, Self::Product];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Data => "Data",
            Self::Design => "Design",
            Self::Product => "Product",
        }
    }

    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// A static job posting shown on the jobs board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobPosting {
    pub id: JobId,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub category: JobCategory,
    pub tags: &'static [&'static str],
}

impl JobPosting {
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.company.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
    Staff,
}

impl Seniority {
    pub const ALL: [Self; 4] = [Self::Junior, Self::Mid, Self::Senior, Self::Staff];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Staff => "Staff",
        }
    }
}

/// Interviewer-side description of an opening, saved as a JSON blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobIntake {
    pub role_title: String,
    pub team: Option<String>,
    pub seniority: Seniority,
    pub skills: Vec<String>,
    pub openings: u32,
    pub remote: bool,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiringDecision {
    StrongYes,
    Yes,
    No,
    StrongNo,
}

impl HiringDecision {
    pub const ALL: [Self; 4] = [Self::StrongYes, Self::Yes, Self::No, Self::StrongNo];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StrongYes => "Strong yes",
            Self::Yes => "Yes",
            Self::No => "No",
            Self::StrongNo => "Strong no",
        }
    }
}

/// Interviewer verdict on a candidate, saved as a JSON blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateJudgment {
    pub candidate_name: String,
    pub decision: HiringDecision,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_uses_camel_case_keys() {
        let intake = JobIntake {
            role_title: "Backend Engineer".into(),
            openings: 2,
            ..JobIntake::default()
        };
        let json = serde_json::to_string(&intake).unwrap();
        assert!(json.contains("\"roleTitle\""), "{json}");
        assert!(json.contains("\"seniority\":\"mid\""), "{json}");
    }
}
