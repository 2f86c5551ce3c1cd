//! Typed access to the client-side session store.
//!
//! Keys keep their legacy names so an existing store reads back unchanged.
//! Absent keys always read as their default; only backend failures are errors.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use mockview_core::model::{
    CandidateJudgment, CookieConsent, FontChoice, JobIntake, ProblemHistory, ProblemId, Profile,
    SessionRecord, UserId, UserType,
};
use storage::repository::KeyValueStore;

use crate::error::SessionStoreError;

/// Every key the app reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    UserId,
    UserEmail,
    UserName,
    UserType,
    NeedsOnboarding,
    HasJobOpenings,
    SelectedFont,
    CookieConsent,
    JobIntakeForm,
    CandidateJudgment,
    ProblemHistory(ProblemId),
}

impl SessionKey {
    /// Keys that make up the signed-in identity.
    pub const IDENTITY: [Self; 7] = [
        Self::AccessToken,
        Self::UserId,
        Self::UserEmail,
        Self::UserName,
        Self::UserType,
        Self::NeedsOnboarding,
        Self::HasJobOpenings,
    ];

    #[must_use]
    pub fn storage_name(self) -> String {
        match self {
            Self::AccessToken => "accessToken".into(),
            Self::UserId => "userId".into(),
            Self::UserEmail => "userEmail".into(),
            Self::UserName => "userName".into(),
            Self::UserType => "userType".into(),
            Self::NeedsOnboarding => "needsOnboarding".into(),
            Self::HasJobOpenings => "hasJobOpenings".into(),
            Self::SelectedFont => "selectedFont".into(),
            Self::CookieConsent => "cookie-consent".into(),
            Self::JobIntakeForm => "jobIntakeForm".into(),
            Self::CandidateJudgment => "candidateJudgment".into(),
            Self::ProblemHistory(id) => format!("problemHistory:{id}"),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_name())
    }
}

const TRUE: &str = "true";

#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn get(&self, key: SessionKey) -> Result<Option<String>, SessionStoreError> {
        Ok(self.kv.get(&key.storage_name()).await?)
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionStoreError> {
        tracing::debug!(%key, "session store write");
        Ok(self.kv.set(&key.storage_name(), value).await?)
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn remove(&self, key: SessionKey) -> Result<(), SessionStoreError> {
        Ok(self.kv.remove(&key.storage_name()).await?)
    }

    /// Write `value`, or remove the key when it is `None`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set_optional(
        &self,
        key: SessionKey,
        value: Option<&str>,
    ) -> Result<(), SessionStoreError> {
        match value {
            Some(value) => self.set(key, value).await,
            None => self.remove(key).await,
        }
    }

    /// Logout: removes every key, history and preferences included.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), SessionStoreError> {
        tracing::info!("session store cleared");
        Ok(self.kv.clear().await?)
    }

    /// Only the literal `"true"` reads as set.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn flag(&self, key: SessionKey) -> Result<bool, SessionStoreError> {
        Ok(self.get(key).await?.as_deref() == Some(TRUE))
    }

    /// Flags are written as `"true"` and removed when cleared.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set_flag(&self, key: SessionKey, value: bool) -> Result<(), SessionStoreError> {
        self.set_optional(key, value.then_some(TRUE)).await
    }

    /// Decode a JSON blob. A malformed blob reads as absent.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        key: SessionKey,
    ) -> Result<Option<T>, SessionStoreError> {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(%key, error = %err, "ignoring malformed session blob");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if encoding or the backend write fails.
    pub async fn set_json<T: Serialize + Sync>(
        &self,
        key: SessionKey,
        value: &T,
    ) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string(value).map_err(|source| SessionStoreError::Encode {
            key: key.storage_name(),
            source,
        })?;
        self.set(key, &raw).await
    }

    //
    // ─── TYPED ACCESSORS ───────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn user_type(&self) -> Result<UserType, SessionStoreError> {
        let raw = self.get(SessionKey::UserType).await?;
        Ok(UserType::from_stored(raw.as_deref()))
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set_user_type(&self, user_type: UserType) -> Result<(), SessionStoreError> {
        self.set_optional(SessionKey::UserType, user_type.stored_value())
            .await
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn font(&self) -> Result<FontChoice, SessionStoreError> {
        let raw = self.get(SessionKey::SelectedFont).await?;
        Ok(FontChoice::from_stored(raw.as_deref()))
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set_font(&self, font: FontChoice) -> Result<(), SessionStoreError> {
        self.set(SessionKey::SelectedFont, font.stored_value()).await
    }

    /// `None` until the visitor answers the cookie banner.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn cookie_consent(&self) -> Result<Option<CookieConsent>, SessionStoreError> {
        let raw = self.get(SessionKey::CookieConsent).await?;
        Ok(CookieConsent::from_stored(raw.as_deref()))
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn set_cookie_consent(
        &self,
        consent: CookieConsent,
    ) -> Result<(), SessionStoreError> {
        self.set(SessionKey::CookieConsent, consent.stored_value())
            .await
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn job_intake(&self) -> Result<Option<JobIntake>, SessionStoreError> {
        self.get_json(SessionKey::JobIntakeForm).await
    }

    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn candidate_judgment(
        &self,
    ) -> Result<Option<CandidateJudgment>, SessionStoreError> {
        self.get_json(SessionKey::CandidateJudgment).await
    }

    /// History for one problem; empty when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn problem_history(
        &self,
        id: ProblemId,
    ) -> Result<ProblemHistory, SessionStoreError> {
        Ok(self
            .get_json(SessionKey::ProblemHistory(id))
            .await?
            .unwrap_or_default())
    }

    /// Assemble the client-visible session from the individual keys.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be read.
    pub async fn load_record(&self) -> Result<SessionRecord, SessionStoreError> {
        let access_token = self.get(SessionKey::AccessToken).await?;
        let user_id = self
            .get(SessionKey::UserId)
            .await?
            .and_then(|raw| match raw.parse::<UserId>() {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed user id");
                    None
                }
            });
        Ok(SessionRecord {
            access_token,
            user_id,
            user_type: self.user_type().await?,
            needs_onboarding: self.flag(SessionKey::NeedsOnboarding).await?,
            has_job_openings: self.flag(SessionKey::HasJobOpenings).await?,
            profile: Profile {
                name: self.get(SessionKey::UserName).await?,
                email: self.get(SessionKey::UserEmail).await?,
            },
        })
    }

    /// Write every identity key of `record`; absent fields are removed.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the backend cannot be written.
    pub async fn save_record(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        self.set_optional(SessionKey::AccessToken, record.access_token.as_deref())
            .await?;
        let user_id = record.user_id.map(|id| id.to_string());
        self.set_optional(SessionKey::UserId, user_id.as_deref())
            .await?;
        self.set_optional(SessionKey::UserName, record.profile.name.as_deref())
            .await?;
        self.set_optional(SessionKey::UserEmail, record.profile.email.as_deref())
            .await?;
        self.set_user_type(record.user_type).await?;
        self.set_flag(SessionKey::NeedsOnboarding, record.needs_onboarding)
            .await?;
        self.set_flag(SessionKey::HasJobOpenings, record.has_job_openings)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::model::{HiringDecision, Seniority};
    use storage::repository::InMemoryStore;

    fn store() -> (SessionStore, Arc<InMemoryStore>) {
        let kv = Arc::new(InMemoryStore::new());
        (SessionStore::new(kv.clone()), kv)
    }

    #[test]
    fn keys_keep_legacy_names() {
        assert_eq!(SessionKey::CookieConsent.storage_name(), "cookie-consent");
        assert_eq!(
            SessionKey::ProblemHistory(ProblemId::new(7)).storage_name(),
            "problemHistory:7"
        );
    }

    #[tokio::test]
    async fn clear_removes_access_token() {
        let (store, _) = store();
        store.set(SessionKey::AccessToken, "t1").await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.get(SessionKey::AccessToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn flags_are_written_as_true_and_removed_when_false() {
        let (store, kv) = store();
        store
            .set_flag(SessionKey::NeedsOnboarding, true)
            .await
            .unwrap();
        assert_eq!(
            kv.get("needsOnboarding").await.unwrap().as_deref(),
            Some("true")
        );

        store
            .set_flag(SessionKey::NeedsOnboarding, false)
            .await
            .unwrap();
        assert_eq!(kv.get("needsOnboarding").await.unwrap(), None);

        kv.set("hasJobOpenings", "yes").await.unwrap();
        assert!(!store.flag(SessionKey::HasJobOpenings).await.unwrap());
    }

    #[tokio::test]
    async fn absent_keys_read_as_defaults() {
        let (store, _) = store();
        let record = store.load_record().await.unwrap();
        assert_eq!(record, SessionRecord::anonymous());
        assert_eq!(store.font().await.unwrap(), FontChoice::System);
        assert_eq!(store.cookie_consent().await.unwrap(), None);
        assert_eq!(store.job_intake().await.unwrap(), None);
    }

    #[tokio::test]
    async fn job_intake_reads_back_deep_equal() {
        let (store, _) = store();
        let intake = JobIntake {
            role_title: "Platform Engineer".into(),
            team: Some("Infra".into()),
            seniority: Seniority::Senior,
            skills: vec!["rust".into(), "kubernetes".into()],
            openings: 3,
            remote: true,
            notes: None,
        };
        store
            .set_json(SessionKey::JobIntakeForm, &intake)
            .await
            .unwrap();
        assert_eq!(store.job_intake().await.unwrap(), Some(intake));
    }

    #[tokio::test]
    async fn malformed_blob_reads_as_absent() {
        let (store, kv) = store();
        kv.set("candidateJudgment", "{not json").await.unwrap();
        assert_eq!(store.candidate_judgment().await.unwrap(), None);

        let judgment = CandidateJudgment {
            candidate_name: "Ada".into(),
            decision: HiringDecision::Yes,
            notes: None,
        };
        store
            .set_json(SessionKey::CandidateJudgment, &judgment)
            .await
            .unwrap();
        assert_eq!(store.candidate_judgment().await.unwrap(), Some(judgment));
    }

    #[tokio::test]
    async fn record_round_trips_through_keys() {
        let (store, kv) = store();
        let record = SessionRecord {
            access_token: Some("mock-token".into()),
            user_id: Some(UserId::random()),
            user_type: UserType::Interviewer,
            needs_onboarding: true,
            has_job_openings: false,
            profile: Profile {
                name: Some("Grace".into()),
                email: Some("grace@example.com".into()),
            },
        };
        store.save_record(&record).await.unwrap();
        assert_eq!(store.load_record().await.unwrap(), record);
        assert_eq!(
            kv.get("userType").await.unwrap().as_deref(),
            Some("interviewer")
        );
    }
}
