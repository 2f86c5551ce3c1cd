use mockview_core::catalog::ProblemListing;
use mockview_core::model::{Difficulty, ProblemStatus};

/// One row of the problems table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub id: u64,
    pub number: u32,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
    pub tags: String,
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "tag tag--easy",
        Difficulty::Medium => "tag tag--medium",
        Difficulty::Hard => "tag tag--hard",
    }
}

#[must_use]
pub fn status_class(status: ProblemStatus) -> &'static str {
    match status {
        ProblemStatus::Todo => "status status--todo",
        ProblemStatus::Attempted => "status status--attempted",
        ProblemStatus::Solved => "status status--solved",
    }
}

#[must_use]
pub fn map_problem_rows(listings: &[ProblemListing]) -> Vec<ProblemRowVm> {
    listings
        .iter()
        .map(|listing| {
            let problem = &listing.problem;
            ProblemRowVm {
                id: problem.id.value(),
                number: problem.number,
                title: problem.title,
                difficulty: problem.difficulty.label(),
                difficulty_class: difficulty_class(problem.difficulty),
                status: listing.status.label(),
                status_class: status_class(listing.status),
                tags: problem.tags.join(", "),
            }
        })
        .collect()
}
