use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mockview_core::forms::{OnboardingDraft, SignupDraft};
use mockview_core::model::{SessionRecord, UserType};
use mockview_core::time::fixed_clock;
use services::{
    AppServices, AuthService, CatalogService, Clock, CodeExecutionService, ContactService,
    IntakeService, QuestionBank, ReportProvider, ServicesConfig, SessionStore,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::{Route, RouteGate};
use crate::session::UiSession;
use crate::views::{
    CandidateJudgmentView, ContactView, DashboardView, HomeView, InterviewView, JobIntakeView,
    JobsView, LoginView, NotFoundView, ProblemDetailView, ProblemsView, SettingsView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn session_store(&self) -> SessionStore {
        self.services.session_store()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn intake(&self) -> Arc<IntakeService> {
        self.services.intake()
    }

    fn contact(&self) -> Arc<ContactService> {
        self.services.contact()
    }

    fn reports(&self) -> Arc<dyn ReportProvider> {
        self.services.reports()
    }

    fn questions(&self) -> QuestionBank {
        self.services.questions().with_shuffle(false)
    }

    fn code_execution(&self) -> Arc<CodeExecutionService> {
        self.services.code_execution()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Problems,
    ProblemDetail(u64),
    Jobs,
    Contact,
    Login,
    Dashboard,
    Settings,
    Interview,
    JobIntake,
    CandidateJudgment,
    NotFound(Vec<String>),
}

impl ViewKind {
    fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home {},
            Self::Problems => Route::Problems {},
            Self::ProblemDetail(id) => Route::ProblemDetail { id: *id },
            Self::Jobs => Route::Jobs {},
            Self::Contact => Route::Contact {},
            Self::Login => Route::Login {},
            Self::Dashboard => Route::Dashboard {},
            Self::Settings => Route::Settings {},
            Self::Interview => Route::Interview {},
            Self::JobIntake => Route::JobIntake {},
            Self::CandidateJudgment => Route::CandidateJudgment {},
            Self::NotFound(segments) => Route::NotFound {
                segments: segments.clone(),
            },
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    record: SessionRecord,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let record = props.record.clone();
    use_context_provider(move || UiSession::preloaded(record));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let requirement = view.route().requirement();
    let page = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Problems => rsx! { ProblemsView {} },
        ViewKind::ProblemDetail(id) => rsx! { ProblemDetailView { id } },
        ViewKind::Jobs => rsx! { JobsView {} },
        ViewKind::Contact => rsx! { ContactView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
        ViewKind::Interview => rsx! { InterviewView {} },
        ViewKind::JobIntake => rsx! { JobIntakeView {} },
        ViewKind::CandidateJudgment => rsx! { CandidateJudgmentView {} },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    };
    rsx! {
        RouteGate { requirement, {page} }
    }
}

/// Landing spot for guard redirects.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        p { class: "elsewhere", "navigated to /{path}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until pending resources and effects have settled.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_services(storage: &Storage) -> AppServices {
    AppServices::from_storage(storage, fixed_clock(), ServicesConfig::instant())
}

fn build_harness(services: AppServices, view: ViewKind, record: SessionRecord) -> ViewHarness {
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, record });
    ViewHarness { dom }
}

/// Harness over a fresh store with nobody signed in.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = test_services(&Storage::in_memory());
    build_harness(services, view, SessionRecord::anonymous())
}

/// Harness over an existing store, with the session read from it.
pub async fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = test_services(storage);
    let record = services.auth().current().await.unwrap_or_default();
    build_harness(services, view, record)
}

/// Harness with an onboarded user of the given type already signed in.
pub async fn setup_signed_in_harness(view: ViewKind, user_type: UserType) -> ViewHarness {
    let services = test_services(&Storage::in_memory());
    let auth = services.auth();
    auth.signup(SignupDraft {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        password: "correct horse".into(),
        confirm_password: "correct horse".into(),
        user_type,
    })
    .await
    .expect("signup");
    auth.complete_onboarding(OnboardingDraft {
        headline: "Engineer".into(),
        target_level: None,
        portfolio_url: None,
    })
    .await
    .expect("onboarding");
    let record = auth.current().await.expect("session");
    build_harness(services, view, record)
}
