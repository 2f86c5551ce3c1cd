use mockview_core::model::{CandidateJudgment, JobIntake};

use crate::error::SessionStoreError;
use crate::session_store::{SessionKey, SessionStore};

/// Interviewer-side forms persisted as JSON blobs.
#[derive(Clone)]
pub struct IntakeService {
    store: SessionStore,
}

impl IntakeService {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the store cannot be read.
    pub async fn load_intake(&self) -> Result<Option<JobIntake>, SessionStoreError> {
        self.store.job_intake().await
    }

    /// Saves the intake and marks the interviewer as having openings.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if encoding or the store write fails.
    pub async fn save_intake(&self, intake: &JobIntake) -> Result<(), SessionStoreError> {
        self.store
            .set_json(SessionKey::JobIntakeForm, intake)
            .await?;
        self.store
            .set_flag(SessionKey::HasJobOpenings, intake.openings > 0)
            .await?;
        tracing::info!(openings = intake.openings, "job intake saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the store cannot be read.
    pub async fn load_judgment(&self) -> Result<Option<CandidateJudgment>, SessionStoreError> {
        self.store.candidate_judgment().await
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if encoding or the store write fails.
    pub async fn save_judgment(
        &self,
        judgment: &CandidateJudgment,
    ) -> Result<(), SessionStoreError> {
        self.store
            .set_json(SessionKey::CandidateJudgment, judgment)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::model::{HiringDecision, Seniority};
    use std::sync::Arc;
    use storage::repository::InMemoryStore;

    fn service() -> (IntakeService, SessionStore) {
        let store = SessionStore::new(Arc::new(InMemoryStore::new()));
        (IntakeService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn saved_intake_reads_back_and_sets_openings_flag() {
        let (intake_service, store) = service();
        let intake = JobIntake {
            role_title: "Data Engineer".into(),
            team: None,
            seniority: Seniority::Junior,
            skills: vec!["sql".into()],
            openings: 1,
            remote: false,
            notes: Some("Start in spring".into()),
        };
        intake_service.save_intake(&intake).await.unwrap();

        assert_eq!(intake_service.load_intake().await.unwrap(), Some(intake));
        assert!(store.flag(SessionKey::HasJobOpenings).await.unwrap());
    }

    #[tokio::test]
    async fn zero_openings_clears_flag() {
        let (intake_service, store) = service();
        intake_service
            .save_intake(&JobIntake {
                role_title: "Designer".into(),
                openings: 0,
                ..JobIntake::default()
            })
            .await
            .unwrap();
        assert!(!store.flag(SessionKey::HasJobOpenings).await.unwrap());
    }

    #[tokio::test]
    async fn judgment_round_trips() {
        let (intake_service, _) = service();
        let judgment = CandidateJudgment {
            candidate_name: "Linus".into(),
            decision: HiringDecision::StrongYes,
            notes: Some("Great systems depth".into()),
        };
        intake_service.save_judgment(&judgment).await.unwrap();
        assert_eq!(intake_service.load_judgment().await.unwrap(), Some(judgment));
    }
}
