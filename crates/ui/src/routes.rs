use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use mockview_core::guard::{self, GuardDecision, RedirectTarget, RouteRequirement};

use crate::session::use_ui_session;
use crate::views::{
    AboutView, CandidateJudgmentView, CodeDemoView, ContactView, CookieBanner, DashboardView,
    FaqView, HomeView, InterviewView, JobIntakeView, JobsView, LoginView, NotFoundView,
    OnboardingView, ProblemDetailView, ProblemsView, SettingsView, SignupView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", HomeView)] Home {},
        #[route("/about", AboutView)] About {},
        #[route("/faq", FaqView)] Faq {},
        #[route("/contact", ContactView)] Contact {},
        #[route("/problems", ProblemsView)] Problems {},
        #[route("/problems/:id", ProblemDetailView)] ProblemDetail { id: u64 },
        #[route("/code", CodeDemoView)] CodeDemo {},
        #[route("/jobs", JobsView)] Jobs {},
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
        #[route("/onboarding", OnboardingView)] Onboarding {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/settings", SettingsView)] Settings {},
        #[route("/interview", InterviewView)] Interview {},
        #[route("/interviewer/intake", JobIntakeView)] JobIntake {},
        #[route("/interviewer/judgment", CandidateJudgmentView)] CandidateJudgment {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// The access rule every route is declared with.
    #[must_use]
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Self::Home {}
            | Self::About {}
            | Self::Faq {}
            | Self::Contact {}
            | Self::Problems {}
            | Self::ProblemDetail { .. }
            | Self::CodeDemo {}
            | Self::Jobs {}
            | Self::NotFound { .. } => RouteRequirement::Public,
            Self::Login {} | Self::Signup {} => RouteRequirement::Guest,
            Self::Onboarding {} => RouteRequirement::Onboarding,
            Self::Dashboard {} | Self::Settings {} | Self::Interview {} => {
                RouteRequirement::Authenticated
            }
            Self::JobIntake {} | Self::CandidateJudgment {} => RouteRequirement::Interviewer,
        }
    }
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Self::Login {},
            RedirectTarget::Dashboard => Self::Dashboard {},
        }
    }
}

#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let requirement = route.requirement();
    let session = use_ui_session();
    let font = session.font();
    let font_style = format!("font-family: {};", font.css_family());

    rsx! {
        div { class: "app", style: "{font_style}",
            Nav {}
            main { class: "content",
                RouteGate { key: "{requirement:?}", requirement,
                    Outlet::<Route> {}
                }
            }
            CookieBanner {}
        }
    }
}

/// Renders `children` only when the session satisfies `requirement`.
///
/// Redirects go through `replace` so the blocked page never lands in history.
#[component]
pub fn RouteGate(requirement: RouteRequirement, children: Element) -> Element {
    let session = use_ui_session();
    let navigator = use_navigator();

    use_effect(move || {
        let Some(record) = session.record() else {
            return;
        };
        if let GuardDecision::Redirect(target) = guard::evaluate(requirement, &record) {
            tracing::debug!(?requirement, ?target, "route guard redirect");
            let _ = navigator.replace(Route::from(target));
        }
    });

    match session.record() {
        None => rsx! {
            p { class: "gate gate--loading", "Loading..." }
        },
        Some(record) => match guard::evaluate(requirement, &record) {
            GuardDecision::Render => rsx! { {children} },
            GuardDecision::Redirect(_) => rsx! {
                p { class: "gate gate--redirect", "Redirecting..." }
            },
        },
    }
}

#[component]
fn Nav() -> Element {
    let session = use_ui_session();
    let record = session.current();
    let signed_in = record.is_authenticated();
    let interviewer = signed_in && record.is_interviewer();

    rsx! {
        nav { class: "topnav",
            Link { class: "brand", to: Route::Home {}, "Mockview" }
            ul {
                li { Link { to: Route::Problems {}, "Problems" } }
                li { Link { to: Route::Jobs {}, "Jobs" } }
                li { Link { to: Route::CodeDemo {}, "Code" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Faq {}, "FAQ" } }
                li { Link { to: Route::Contact {}, "Contact" } }
                if signed_in {
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li { Link { to: Route::Interview {}, "Interview" } }
                    if interviewer {
                        li { Link { to: Route::JobIntake {}, "Hiring" } }
                    }
                    li { Link { to: Route::Settings {}, "{record.profile.display_name()}" } }
                } else {
                    li { Link { to: Route::Login {}, "Log in" } }
                    li { Link { class: "btn btn-primary", to: Route::Signup {}, "Sign up" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_routes_declare_their_requirement() {
        assert_eq!(Route::Dashboard {}.requirement(), RouteRequirement::Authenticated);
        assert_eq!(Route::Interview {}.requirement(), RouteRequirement::Authenticated);
        assert_eq!(Route::Onboarding {}.requirement(), RouteRequirement::Onboarding);
        assert_eq!(Route::JobIntake {}.requirement(), RouteRequirement::Interviewer);
        assert_eq!(Route::Login {}.requirement(), RouteRequirement::Guest);
        assert_eq!(
            Route::NotFound { segments: vec!["nope".into()] }.requirement(),
            RouteRequirement::Public
        );
    }

    #[test]
    fn redirect_targets_map_to_routes() {
        assert_eq!(Route::from(RedirectTarget::Login).to_string(), "/login");
        assert_eq!(Route::from(RedirectTarget::Dashboard).to_string(), "/dashboard");
        assert_eq!(Route::ProblemDetail { id: 7 }.to_string(), "/problems/7");
    }
}
