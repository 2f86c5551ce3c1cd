//! Filtering and pagination over static catalogs.
//!
//! Both steps are pure. Filtering keeps the source order; pagination is
//! 1-based and clamps instead of failing.

use crate::model::{Difficulty, JobCategory, JobPosting, Problem, ProblemStatus};

/// Keep the items matching `predicate`, in source order.
#[must_use]
pub fn filter_items<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// One page of a filtered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page that was served, after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice out page `page` (1-based) of `page_size` items.
///
/// Page 0 is served as page 1 and a zero page size as 1. Pages past the end
/// come back empty.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let slice = items
        .get(start..)
        .map(|rest| &rest[..rest.len().min(page_size)])
        .unwrap_or_default();

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// A problem paired with the status derived from the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemListing {
    pub problem: Problem,
    pub status: ProblemStatus,
}

/// Problem filters; `None` is "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub tag: Option<String>,
    pub status: Option<ProblemStatus>,
}

impl ProblemFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn matches(&self, listing: &ProblemListing) -> bool {
        let problem = &listing.problem;
        problem.matches_query(&self.query)
            && self.difficulty.is_none_or(|level| problem.difficulty == level)
            && self.tag.as_deref().is_none_or(|tag| problem.has_tag(tag))
            && self.status.is_none_or(|status| listing.status == status)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.difficulty.is_some()
            || self.tag.is_some()
            || self.status.is_some()
    }
}

/// Job board filters; `None` is "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub category: Option<JobCategory>,
    pub location: Option<String>,
}

impl JobFilter {
    #[must_use]
    pub fn matches(&self, job: &JobPosting) -> bool {
        job.matches_query(&self.query)
            && self.category.is_none_or(|category| job.category == category)
            && self
                .location
                .as_deref()
                .is_none_or(|location| job.location.eq_ignore_ascii_case(location.trim()))
    }
}
