use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use mockview_core::model::ProblemStatus;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_ui_session;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ProgressCounts {
    solved: usize,
    attempted: usize,
    total: usize,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let navigator = use_navigator();
    let record = session.current();
    let needs_onboarding = record.needs_onboarding;

    use_effect(move || {
        if session.current().needs_onboarding {
            let _ = navigator.replace(Route::Onboarding {});
        }
    });

    let catalog = ctx.catalog();
    let progress = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let listings = catalog
                .problem_listings()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let count = |status| listings.iter().filter(|item| item.status == status).count();
            Ok::<_, ViewError>(ProgressCounts {
                solved: count(ProblemStatus::Solved),
                attempted: count(ProblemStatus::Attempted),
                total: listings.len(),
            })
        }
    });
    let state = view_state_from_resource(progress);

    if needs_onboarding {
        return rsx! {
            p { class: "gate gate--redirect", "Redirecting..." }
        };
    }

    let name = record.profile.display_name().to_string();
    let role = record.user_type.label();

    rsx! {
        div { class: "page dashboard",
            h2 { "Welcome back, {name}" }
            p { class: "muted", "Signed in as {role}" }
            section { class: "dashboard__cards",
                div { class: "card",
                    h3 { "Mock interview" }
                    p { "Rehearse with a timed interview tailored to your target employer." }
                    Link { class: "btn btn-primary", to: Route::Interview {}, "Start interview" }
                }
                div { class: "card",
                    h3 { "Problem progress" }
                    match state {
                        ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                        ViewState::Error(err) => rsx! { p { "{err.message()}" } },
                        ViewState::Ready(counts) => rsx! {
                            p { "Solved {counts.solved} of {counts.total}" }
                            p { class: "muted", "{counts.attempted} attempted" }
                        },
                    }
                    Link { to: Route::Problems {}, "Browse problems" }
                }
                if record.is_interviewer() {
                    div { class: "card",
                        h3 { "Hiring" }
                        if record.has_job_openings {
                            p { "You have open roles on file." }
                        } else {
                            p { "Tell us about the role you are hiring for." }
                        }
                        Link { to: Route::JobIntake {}, "Job intake" }
                        " · "
                        Link { to: Route::CandidateJudgment {}, "Candidate decision" }
                    }
                }
            }
        }
    }
}
