//! Sign-in, sign-up and profile updates against a mocked auth backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use mockview_core::forms::{LoginDraft, LoginForm, OnboardingDraft, OnboardingForm, SignupDraft, SignupForm};
use mockview_core::model::{Profile, SessionRecord, UserId, UserType};

use crate::error::AuthError;
use crate::session_store::{SessionKey, SessionStore};

/// What the backend hands out on a successful login or signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthGrant {
    pub access_token: String,
    pub user_id: UserId,
    pub user_type: UserType,
    pub profile: Profile,
    pub needs_onboarding: bool,
}

impl AuthGrant {
    #[must_use]
    pub fn into_record(self, has_job_openings: bool) -> SessionRecord {
        SessionRecord {
            access_token: Some(self.access_token),
            user_id: Some(self.user_id),
            user_type: self.user_type,
            needs_onboarding: self.needs_onboarding,
            has_job_openings,
            profile: self.profile,
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, form: &LoginForm) -> Result<AuthGrant, AuthError>;
    async fn signup(&self, form: &SignupForm) -> Result<AuthGrant, AuthError>;
}

#[derive(Clone, Debug)]
struct MockAccount {
    user_id: UserId,
    user_type: UserType,
    name: String,
    password: String,
}

/// Accepts any well-formed credentials after a simulated delay.
///
/// Accounts created through `signup` are remembered for the lifetime of the
/// provider so a later login returns the same id and role, and a wrong
/// password for a known account is rejected.
#[derive(Clone, Default)]
pub struct MockAuthProvider {
    latency: Duration,
    accounts: Arc<Mutex<HashMap<String, MockAccount>>>,
}

impl MockAuthProvider {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            accounts: Arc::default(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn issue_token() -> String {
        format!("mock-{}", Uuid::new_v4().simple())
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, form: &LoginForm) -> Result<AuthGrant, AuthError> {
        self.simulate_latency().await;
        let known = {
            let accounts = self.accounts.lock().map_err(|_| AuthError::Rejected)?;
            accounts.get(&form.email).cloned()
        };
        let (user_id, user_type, name) = match known {
            Some(account) if account.password != form.password => return Err(AuthError::Rejected),
            Some(account) => (account.user_id, account.user_type, Some(account.name)),
            None => (UserId::random(), UserType::Candidate, None),
        };
        Ok(AuthGrant {
            access_token: Self::issue_token(),
            user_id,
            user_type,
            profile: Profile {
                name,
                email: Some(form.email.clone()),
            },
            needs_onboarding: false,
        })
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthGrant, AuthError> {
        self.simulate_latency().await;
        let user_id = UserId::random();
        {
            let mut accounts = self.accounts.lock().map_err(|_| AuthError::Rejected)?;
            if accounts.contains_key(&form.email) {
                return Err(AuthError::AlreadyRegistered);
            }
            accounts.insert(
                form.email.clone(),
                MockAccount {
                    user_id,
                    user_type: form.user_type,
                    name: form.name.clone(),
                    password: form.password.clone(),
                },
            );
        }
        Ok(AuthGrant {
            access_token: Self::issue_token(),
            user_id,
            user_type: form.user_type,
            profile: form.profile(),
            needs_onboarding: true,
        })
    }
}

/// Writes the session record on sign-in and clears it on logout.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    store: SessionStore,
}

impl AuthService {
    #[must_use]
    pub fn new(provider: Arc<dyn AuthProvider>, store: SessionStore) -> Self {
        Self { provider, store }
    }

    /// Current session as read from the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be read.
    pub async fn current(&self) -> Result<SessionRecord, AuthError> {
        Ok(self.store.load_record().await?)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Invalid` for malformed input, `AuthError::Rejected`
    /// when the backend refuses the credentials, or a store failure.
    pub async fn login(&self, draft: LoginDraft) -> Result<SessionRecord, AuthError> {
        let form = draft.validate()?;
        let grant = self.provider.login(&form).await?;
        let has_job_openings = self.store.job_intake().await?.is_some();
        let record = grant.into_record(has_job_openings);
        self.store.save_record(&record).await?;
        tracing::info!(user_type = record.user_type.label(), "signed in");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Invalid` for malformed input,
    /// `AuthError::AlreadyRegistered` for a taken email, or a store failure.
    pub async fn signup(&self, draft: SignupDraft) -> Result<SessionRecord, AuthError> {
        let form = draft.validate()?;
        let grant = self.provider.signup(&form).await?;
        let record = grant.into_record(false);
        self.store.save_record(&record).await?;
        tracing::info!(user_type = record.user_type.label(), "signed up");
        Ok(record)
    }

    /// Clears the whole store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await?;
        tracing::info!("signed out");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` without a session, `AuthError::Invalid`
    /// for a malformed draft, or a store failure.
    pub async fn complete_onboarding(
        &self,
        draft: OnboardingDraft,
    ) -> Result<OnboardingForm, AuthError> {
        self.require_session().await?;
        let form = draft.validate()?;
        self.store
            .set_flag(SessionKey::NeedsOnboarding, false)
            .await?;
        tracing::info!(target_level = form.target_level.label(), "onboarding completed");
        Ok(form)
    }

    /// Update the cached name and email. Blank values remove the key.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` without a session, `AuthError::Invalid`
    /// for a malformed email, or a store failure.
    pub async fn update_profile(&self, profile: Profile) -> Result<SessionRecord, AuthError> {
        self.require_session().await?;
        let name = profile
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let email = match profile
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
        {
            Some(email) => Some(
                LoginDraft {
                    email,
                    password: "unused".into(),
                }
                .validate()?
                .email,
            ),
            None => None,
        };
        self.store
            .set_optional(SessionKey::UserName, name.as_deref())
            .await?;
        self.store
            .set_optional(SessionKey::UserEmail, email.as_deref())
            .await?;
        Ok(self.store.load_record().await?)
    }

    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` without a session, or a store failure.
    pub async fn set_user_type(&self, user_type: UserType) -> Result<SessionRecord, AuthError> {
        self.require_session().await?;
        self.store.set_user_type(user_type).await?;
        tracing::info!(user_type = user_type.label(), "switched role");
        Ok(self.store.load_record().await?)
    }

    async fn require_session(&self) -> Result<SessionRecord, AuthError> {
        let record = self.store.load_record().await?;
        if record.is_authenticated() {
            Ok(record)
        } else {
            Err(AuthError::NotSignedIn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::forms::Field;
    use storage::repository::InMemoryStore;

    fn service() -> AuthService {
        let store = SessionStore::new(Arc::new(InMemoryStore::new()));
        AuthService::new(Arc::new(MockAuthProvider::new(Duration::ZERO)), store)
    }

    fn signup_draft(user_type: UserType) -> SignupDraft {
        SignupDraft {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            password: "correct-horse".into(),
            confirm_password: "correct-horse".into(),
            user_type,
        }
    }

    #[tokio::test]
    async fn signup_starts_onboarding_and_logout_clears() {
        let auth = service();
        let record = auth.signup(signup_draft(UserType::Interviewer)).await.unwrap();
        assert!(record.is_authenticated());
        assert!(record.needs_onboarding);
        assert_eq!(auth.current().await.unwrap(), record);

        auth.logout().await.unwrap();
        assert!(!auth.current().await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn login_returns_role_of_known_account() {
        let auth = service();
        auth.signup(signup_draft(UserType::Interviewer)).await.unwrap();
        auth.logout().await.unwrap();

        let record = auth
            .login(LoginDraft {
                email: "Grace@Example.com".into(),
                password: "correct-horse".into(),
            })
            .await
            .unwrap();
        assert_eq!(record.user_type, UserType::Interviewer);
        assert!(!record.needs_onboarding);

        let err = auth
            .login(LoginDraft {
                email: "grace@example.com".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected));
    }

    #[tokio::test]
    async fn invalid_login_never_reaches_the_provider() {
        let auth = service();
        let err = auth.login(LoginDraft::default()).await.unwrap_err();
        let AuthError::Invalid(errors) = err else {
            panic!("expected form errors, got {err:?}");
        };
        assert!(errors.get(Field::Email).is_some());
        assert!(!auth.current().await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn onboarding_clears_flag() {
        let auth = service();
        auth.signup(signup_draft(UserType::Candidate)).await.unwrap();
        auth.complete_onboarding(OnboardingDraft {
            headline: "Backend engineer".into(),
            ..OnboardingDraft::default()
        })
        .await
        .unwrap();
        assert!(!auth.current().await.unwrap().needs_onboarding);
    }

    #[tokio::test]
    async fn profile_updates_require_a_session() {
        let auth = service();
        let err = auth.set_user_type(UserType::Interviewer).await.unwrap_err();
        assert!(matches!(err, AuthError::NotSignedIn));
    }
}
