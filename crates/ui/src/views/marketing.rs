use dioxus::prelude::*;
use dioxus_router::Link;

use services::data::EMPLOYERS;

use crate::routes::Route;
use crate::session::use_ui_session;

const FAQ: [(&str, &str); 5] = [
    (
        "How does a mock interview work?",
        "Pick a target employer, choose a difficulty and length, then answer questions by video, audio or chat while a countdown runs.",
    ),
    (
        "Do I need a camera?",
        "Only for video interviews. Audio interviews need a microphone and chat interviews need nothing at all.",
    ),
    (
        "Is my feedback report saved?",
        "Reports are generated when an interview ends and shown on the summary step. Start a new interview to practise again.",
    ),
    (
        "Can I practise coding problems?",
        "Yes. The problem catalogue tracks which problems you have attempted or solved on this device.",
    ),
    (
        "I'm hiring. Can I use Mockview?",
        "Switch your role to interviewer in settings to record job openings and candidate decisions.",
    ),
];

#[component]
pub fn HomeView() -> Element {
    let session = use_ui_session();
    let record = session.current();
    let (cta_label, cta_route) = if record.is_authenticated() {
        ("Start an interview", Route::Interview {})
    } else {
        ("Get started", Route::Signup {})
    };

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "Practise interviews before they count" }
                p { class: "lede",
                    "Realistic mock interviews, a coding problem catalogue and a job board in one place."
                }
                Link { class: "btn btn-primary", to: cta_route, "{cta_label}" }
            }
            section { class: "employers",
                h2 { "Prepare for" }
                ul { class: "employer-list",
                    for employer in EMPLOYERS.iter() {
                        li { key: "{employer.slug}", "{employer.name}" }
                    }
                }
            }
            section { class: "features",
                div { class: "feature",
                    h3 { "Mock interviews" }
                    p { "Timed sessions with a question flow tailored to the employer and level." }
                }
                div { class: "feature",
                    h3 { "Coding problems" }
                    p { "Filter by difficulty, topic and progress." }
                    Link { to: Route::Problems {}, "Browse problems" }
                }
                div { class: "feature",
                    h3 { "Jobs" }
                    p { "See who is hiring and where." }
                    Link { to: Route::Jobs {}, "Browse jobs" }
                }
            }
        }
    }
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page about",
            h2 { "About Mockview" }
            p {
                "Mockview helps candidates rehearse technical interviews and helps interviewers keep their hiring notes in order."
            }
            p {
                "Everything you do here stays on this device. There is no account server behind the sign in form."
            }
        }
    }
}

#[component]
pub fn FaqView() -> Element {
    rsx! {
        div { class: "page faq",
            h2 { "Frequently asked questions" }
            dl {
                for (question, answer) in FAQ {
                    div { key: "{question}", class: "faq__item",
                        dt { "{question}" }
                        dd { "{answer}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
