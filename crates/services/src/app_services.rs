use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::auth::{AuthService, MockAuthProvider};
use crate::catalog_service::CatalogService;
use crate::code_execution::CodeExecutionService;
use crate::config::ServicesConfig;
use crate::contact::ContactService;
use crate::error::AppServicesError;
use crate::intake::IntakeService;
use crate::question_bank::QuestionBank;
use crate::report::{MockReportProvider, ReportProvider};
use crate::session_store::SessionStore;

/// Assembles app-facing services over one session store.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    session_store: SessionStore,
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
    intake: Arc<IntakeService>,
    contact: Arc<ContactService>,
    reports: Arc<dyn ReportProvider>,
    questions: QuestionBank,
    code_execution: Arc<CodeExecutionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: ServicesConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, config))
    }

    /// Build services over an in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock, config: ServicesConfig) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, config)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, config: ServicesConfig) -> Self {
        let session_store = SessionStore::new(Arc::clone(&storage.kv));
        let auth = Arc::new(AuthService::new(
            Arc::new(MockAuthProvider::new(config.mock_latency)),
            session_store.clone(),
        ));
        let catalog = Arc::new(CatalogService::new(clock, session_store.clone()));
        let intake = Arc::new(IntakeService::new(session_store.clone()));
        let contact = Arc::new(ContactService::new(clock, config.mock_latency));
        let reports: Arc<dyn ReportProvider> =
            Arc::new(MockReportProvider::new(config.mock_latency));
        let code_execution = Arc::new(CodeExecutionService::new(config.code_exec_url));

        Self {
            clock,
            session_store,
            auth,
            catalog,
            intake,
            contact,
            reports,
            questions: QuestionBank::new(),
            code_execution,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn session_store(&self) -> SessionStore {
        self.session_store.clone()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn intake(&self) -> Arc<IntakeService> {
        Arc::clone(&self.intake)
    }

    #[must_use]
    pub fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<dyn ReportProvider> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn questions(&self) -> QuestionBank {
        self.questions
    }

    #[must_use]
    pub fn code_execution(&self) -> Arc<CodeExecutionService> {
        Arc::clone(&self.code_execution)
    }
}
