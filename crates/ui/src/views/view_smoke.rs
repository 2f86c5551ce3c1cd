use std::sync::Arc;

use async_trait::async_trait;
use mockview_core::model::UserType;
use storage::repository::{KeyValueStore, Storage, StorageError};

use super::test_harness::{
    ViewKind, setup_signed_in_harness, setup_view_harness, setup_view_harness_with_storage,
};

struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_employers() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Stripe"));
}

#[tokio::test(flavor = "current_thread")]
async fn problems_view_smoke_renders_first_page() {
    let mut harness = setup_view_harness(ViewKind::Problems);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Two Sum"));
    assert!(html.contains("Page 1 of 3"));
}

#[tokio::test(flavor = "current_thread")]
async fn problems_view_smoke_reports_store_failure() {
    let storage = Storage {
        kv: Arc::new(FailingStore),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Problems, &storage).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"));
}

#[tokio::test(flavor = "current_thread")]
async fn problem_detail_smoke_renders_markdown_statement() {
    let mut harness = setup_view_harness(ViewKind::ProblemDetail(1));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Two Sum"));
    assert!(html.contains("<strong>Example</strong>"));
}

#[tokio::test(flavor = "current_thread")]
async fn problem_detail_smoke_handles_unknown_id() {
    let mut harness = setup_view_harness(ViewKind::ProblemDetail(9_999));
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Problem not found"));
}

#[tokio::test(flavor = "current_thread")]
async fn jobs_view_smoke_renders_pager() {
    let mut harness = setup_view_harness(ViewKind::Jobs);
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Page 1 of 2 (12 results)"));
}

#[tokio::test(flavor = "current_thread")]
async fn contact_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Contact);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("contact-email"));
    assert!(html.contains("contact-message"));
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_smoke_names_the_path() {
    let mut harness =
        setup_view_harness(ViewKind::NotFound(vec!["no".into(), "such".into()]));
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Nothing lives at /no/such."));
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_dashboard_redirects_to_login() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Welcome back"));
    assert!(html.contains("navigated to /login"));
}

#[tokio::test(flavor = "current_thread")]
async fn signed_in_dashboard_greets_user() {
    let mut harness = setup_signed_in_harness(ViewKind::Dashboard, UserType::Candidate).await;
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Welcome back, Ada Lovelace"));
}

#[tokio::test(flavor = "current_thread")]
async fn signed_in_login_view_redirects_to_dashboard() {
    let mut harness = setup_signed_in_harness(ViewKind::Login, UserType::Candidate).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("login-email"));
    assert!(html.contains("navigated to /dashboard"));
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_login_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("login-email"));
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_starts_at_setup() {
    let mut harness = setup_signed_in_harness(ViewKind::Interview, UserType::Candidate).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Set up your interview"));
    assert!(html.contains("Stripe"));
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_profile_form() {
    let mut harness = setup_signed_in_harness(ViewKind::Settings, UserType::Candidate).await;
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("settings-name"));
}

#[tokio::test(flavor = "current_thread")]
async fn job_intake_is_closed_to_candidates() {
    let mut harness = setup_signed_in_harness(ViewKind::JobIntake, UserType::Candidate).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Save intake"));
    assert!(html.contains("navigated to /dashboard"));
}

#[tokio::test(flavor = "current_thread")]
async fn job_intake_opens_for_interviewers() {
    let mut harness = setup_signed_in_harness(ViewKind::JobIntake, UserType::Interviewer).await;
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Save intake"));
}

#[tokio::test(flavor = "current_thread")]
async fn candidate_judgment_opens_for_interviewers() {
    let mut harness =
        setup_signed_in_harness(ViewKind::CandidateJudgment, UserType::Interviewer).await;
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("judgment-candidate"));
}
