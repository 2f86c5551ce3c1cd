mod auth;
mod code_demo;
mod components;
mod contact;
mod cookie_banner;
mod dashboard;
mod interview;
mod interviewer;
mod jobs;
mod marketing;
mod onboarding;
mod problems;
mod settings;
mod state;

pub use auth::{LoginView, SignupView};
pub use code_demo::{CodeDemoView, CodeRunner};
pub use contact::ContactView;
pub use cookie_banner::CookieBanner;
pub use dashboard::DashboardView;
pub use interview::InterviewView;
pub use interviewer::{CandidateJudgmentView, JobIntakeView};
pub use jobs::JobsView;
pub use marketing::{AboutView, FaqView, HomeView, NotFoundView};
pub use onboarding::OnboardingView;
pub use problems::{ProblemDetailView, ProblemsView};
pub use settings::SettingsView;
pub use state::{Notice, NoticeBar, ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
