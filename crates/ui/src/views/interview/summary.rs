use dioxus::prelude::*;
use dioxus_router::Link;

use mockview_core::model::EndReason;
use mockview_core::wizard::InterviewWizard;
use services::QuestionQueue;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_clock, map_report};

#[component]
pub fn SummaryStep(wizard: Signal<InterviewWizard>, questions: Signal<QuestionQueue>) -> Element {
    let mut wizard = wizard;
    let mut questions = questions;
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();
    let completed = use_hook(|| wizard.peek().completed().cloned());

    let report_completed = completed.clone();
    let report = use_resource(move || {
        let reports = reports.clone();
        let completed = report_completed.clone();
        async move {
            let completed = completed.ok_or(ViewError::Unknown)?;
            let report = reports.evaluate(&completed).await.map_err(|err| {
                tracing::warn!(error = %err, "report generation failed");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_report(&report))
        }
    });

    let Some(completed) = completed else {
        return rsx! {};
    };
    let headline = match completed.reason {
        EndReason::TimerExpired => "Time's up",
        EndReason::UserEnded => "Interview ended",
    };
    let elapsed = format_clock(completed.elapsed_secs);
    let answers = completed.candidate_messages().count();

    rsx! {
        div { class: "interview-summary",
            h2 { "{headline}" }
            p { class: "muted",
                "{completed.config.employer.name} · {completed.config.difficulty.label()} · {elapsed} elapsed · {answers} answers"
            }
            match view_state_from_resource(report) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Preparing your feedback..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut report = report;
                            report.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(vm) => rsx! {
                    section { class: "report",
                        h3 { "{vm.title}" }
                        p { class: "report__overall", "Overall {vm.overall}/100 · {vm.overall_band}" }
                        p { class: "muted", "Completed {vm.completed_at}" }
                        table { class: "report__skills",
                            tbody {
                                for skill in vm.skills.iter() {
                                    tr { key: "{skill.name}",
                                        th { "{skill.name}" }
                                        td { "{skill.score}" }
                                        td { "{skill.band}" }
                                        td { class: "muted", "{skill.comment}" }
                                    }
                                }
                            }
                        }
                        if !vm.strengths.is_empty() {
                            h4 { "Strengths" }
                            ul {
                                for item in vm.strengths.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                        if !vm.improvements.is_empty() {
                            h4 { "To improve" }
                            ul {
                                for item in vm.improvements.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                        details { class: "report__transcript",
                            summary { "Transcript ({vm.transcript.len()} messages)" }
                            for (index, line) in vm.transcript.iter().enumerate() {
                                p { key: "{index}",
                                    strong { "{line.speaker} " }
                                    span { class: "muted", "[{line.at}] " }
                                    "{line.text}"
                                }
                            }
                        }
                    }
                },
            }
            div { class: "interview-summary__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if wizard.write().restart().is_ok() {
                            questions.set(QuestionQueue::default());
                        }
                    },
                    "Start another interview"
                }
                Link { to: Route::Dashboard {}, "Back to dashboard" }
            }
        }
    }
}
