use mockview_core::Clock;
use mockview_core::catalog::{
    JobFilter, Page, ProblemFilter, ProblemListing, filter_items, paginate,
};
use mockview_core::model::{Attempt, JobPosting, Problem, ProblemHistory, ProblemId};

use crate::data;
use crate::error::CatalogError;
use crate::session_store::{SessionKey, SessionStore};

pub const PROBLEMS_PAGE_SIZE: usize = 10;
pub const JOBS_PAGE_SIZE: usize = 6;

/// Problem and job listings over the static catalogues.
#[derive(Clone)]
pub struct CatalogService {
    clock: Clock,
    store: SessionStore,
    problems: &'static [Problem],
    jobs: &'static [JobPosting],
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock, store: SessionStore) -> Self {
        Self::with_catalog(clock, store, data::PROBLEMS, data::JOBS)
    }

    #[must_use]
    pub fn with_catalog(
        clock: Clock,
        store: SessionStore,
        problems: &'static [Problem],
        jobs: &'static [JobPosting],
    ) -> Self {
        Self {
            clock,
            store,
            problems,
            jobs,
        }
    }

    #[must_use]
    pub fn problem(&self, id: ProblemId) -> Option<&'static Problem> {
        self.problems.iter().find(|problem| problem.id == id)
    }

    /// Every problem with its status read from the stored history.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the history cannot be read.
    pub async fn problem_listings(&self) -> Result<Vec<ProblemListing>, CatalogError> {
        let mut listings = Vec::with_capacity(self.problems.len());
        for problem in self.problems {
            let status = self.store.problem_history(problem.id).await?.status();
            listings.push(ProblemListing {
                problem: problem.clone(),
                status,
            });
        }
        Ok(listings)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the history cannot be read.
    pub async fn problems_page(
        &self,
        filter: &ProblemFilter,
        page: usize,
    ) -> Result<Page<ProblemListing>, CatalogError> {
        let listings = self.problem_listings().await?;
        let filtered = filter_items(&listings, |listing| filter.matches(listing));
        Ok(paginate(&filtered, PROBLEMS_PAGE_SIZE, page))
    }

    #[must_use]
    pub fn jobs_page(&self, filter: &JobFilter, page: usize) -> Page<JobPosting> {
        let filtered = filter_items(self.jobs, |job| filter.matches(job));
        paginate(&filtered, JOBS_PAGE_SIZE, page)
    }

    /// Append a submission to the problem's history.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownProblem` for an id outside the catalogue,
    /// or a store failure.
    pub async fn record_attempt(
        &self,
        id: ProblemId,
        language: &str,
        passed: bool,
    ) -> Result<ProblemHistory, CatalogError> {
        if self.problem(id).is_none() {
            return Err(CatalogError::UnknownProblem(id.value()));
        }
        let mut history = self.store.problem_history(id).await?;
        history.push(Attempt {
            language: language.to_string(),
            passed,
            submitted_at: self.clock.now(),
        });
        self.store
            .set_json(SessionKey::ProblemHistory(id), &history)
            .await?;
        tracing::debug!(problem = %id, passed, "recorded attempt");
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::model::{Difficulty, ProblemStatus};
    use mockview_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::repository::InMemoryStore;

    fn service() -> CatalogService {
        CatalogService::new(
            fixed_clock(),
            SessionStore::new(Arc::new(InMemoryStore::new())),
        )
    }

    #[tokio::test]
    async fn unfiltered_pages_follow_catalogue_order() {
        let catalog = service();
        let first = catalog.problems_page(&ProblemFilter::all(), 1).await.unwrap();
        assert_eq!(
            first.items.iter().map(|l| l.problem.number).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );

        let third = catalog.problems_page(&ProblemFilter::all(), 3).await.unwrap();
        assert_eq!(
            third.items.iter().map(|l| l.problem.number).collect::<Vec<_>>(),
            vec![21, 22, 23, 24, 25]
        );
        assert!(catalog
            .problems_page(&ProblemFilter::all(), 4)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn status_comes_from_recorded_attempts() {
        let catalog = service();
        catalog
            .record_attempt(ProblemId::new(2), "rust", false)
            .await
            .unwrap();
        catalog
            .record_attempt(ProblemId::new(1), "rust", true)
            .await
            .unwrap();

        let solved = ProblemFilter {
            status: Some(ProblemStatus::Solved),
            ..ProblemFilter::default()
        };
        let page = catalog.problems_page(&solved, 1).await.unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].problem.number, 1);

        let attempted = ProblemFilter {
            status: Some(ProblemStatus::Attempted),
            difficulty: Some(Difficulty::Medium),
            ..ProblemFilter::default()
        };
        assert_eq!(catalog.problems_page(&attempted, 1).await.unwrap().total_items, 1);
    }

    #[tokio::test]
    async fn unknown_problem_is_rejected() {
        let err = service()
            .record_attempt(ProblemId::new(999), "rust", true)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownProblem(999)));
    }

    #[test]
    fn jobs_filter_by_location() {
        let filter = JobFilter {
            location: Some("remote".into()),
            ..JobFilter::default()
        };
        let page = service().jobs_page(&filter, 1);
        assert!(page.items.iter().all(|job| job.location == "Remote"));
        assert_eq!(page.total_items, 4);
    }
}
