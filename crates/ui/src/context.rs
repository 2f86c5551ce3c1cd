use std::sync::Arc;

use services::{
    AuthService, CatalogService, Clock, CodeExecutionService, ContactService, IntakeService,
    QuestionBank, ReportProvider, SessionStore,
};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn session_store(&self) -> SessionStore;
    fn auth(&self) -> Arc<AuthService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn intake(&self) -> Arc<IntakeService>;
    fn contact(&self) -> Arc<ContactService>;
    fn reports(&self) -> Arc<dyn ReportProvider>;
    fn questions(&self) -> QuestionBank;
    fn code_execution(&self) -> Arc<CodeExecutionService>;
}

#[derive(Clone)]
pub struct AppContext {
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

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            session_store: app.session_store(),
            auth: app.auth(),
            catalog: app.catalog(),
            intake: app.intake(),
            contact: app.contact(),
            reports: app.reports(),
            questions: app.questions(),
            code_execution: app.code_execution(),
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

// Provided by the composition root (`crates/app`) or the test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
