use dioxus::prelude::*;

use mockview_core::model::{CandidateJudgment, HiringDecision, JobIntake, Seniority};

use crate::context::AppContext;
use crate::session::use_ui_session;
use crate::views::{Notice, NoticeBar, ViewError, ViewState, view_state_from_resource};

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build an intake from raw form input.
///
/// # Errors
///
/// Returns the message to show when the role title is blank or the number of
/// openings is not a whole number.
fn intake_from_input(
    role_title: &str,
    team: &str,
    seniority: Seniority,
    skills: &str,
    openings: &str,
    remote: bool,
    notes: &str,
) -> Result<JobIntake, &'static str> {
    let role_title = optional_text(role_title).ok_or("Role title is required.")?;
    let openings = openings
        .trim()
        .parse::<u32>()
        .map_err(|_| "Openings must be a whole number.")?;
    Ok(JobIntake {
        role_title,
        team: optional_text(team),
        seniority,
        skills: parse_skills(skills),
        openings,
        remote,
        notes: optional_text(notes),
    })
}

#[component]
pub fn JobIntakeView() -> Element {
    let ctx = use_context::<AppContext>();
    let intake = ctx.intake();
    let saved = use_resource(move || {
        let intake = intake.clone();
        async move {
            intake
                .load_intake()
                .await
                .map(Option::unwrap_or_default)
                .map_err(|_| ViewError::Unknown)
        }
    });

    rsx! {
        div { class: "page intake",
            h2 { "Job intake" }
            p { "Describe the role you are hiring for. Saving with at least one opening marks you as hiring." }
            match view_state_from_resource(saved) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Error(err) => rsx! { p { "{err.message()}" } },
                ViewState::Ready(initial) => rsx! { JobIntakeForm { initial } },
            }
        }
    }
}

#[component]
fn JobIntakeForm(initial: JobIntake) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let mut role_title = use_signal(|| initial.role_title.clone());
    let mut team = use_signal(|| initial.team.clone().unwrap_or_default());
    let mut seniority = use_signal(|| initial.seniority);
    let mut skills = use_signal(|| initial.skills.join(", "));
    let mut openings = use_signal(|| initial.openings.max(1).to_string());
    let mut remote = use_signal(|| initial.remote);
    let mut notes = use_signal(|| initial.notes.clone().unwrap_or_default());
    let notice = use_signal(|| None::<Notice>);

    let on_submit = use_callback(move |()| {
        let mut notice = notice;
        let intake = match intake_from_input(
            &role_title(),
            &team(),
            seniority(),
            &skills(),
            &openings(),
            remote(),
            &notes(),
        ) {
            Ok(intake) => intake,
            Err(message) => {
                notice.set(Some(Notice::Error(message.into())));
                return;
            }
        };
        let service = ctx.intake();
        let auth = ctx.auth();
        let mut session = session;
        spawn(async move {
            if let Err(err) = service.save_intake(&intake).await {
                tracing::warn!(error = %err, "failed to save job intake");
                notice.set(Some(Notice::Error(ViewError::Unknown.message().into())));
                return;
            }
            notice.set(Some(Notice::Success("Job intake saved.".into())));
            if let Ok(record) = auth.current().await {
                session.publish(record);
            }
        });
    });

    let seniority_index = Seniority::ALL
        .iter()
        .position(|level| *level == seniority())
        .unwrap_or_default();

    rsx! {
        NoticeBar { notice: notice() }
        form {
            class: "form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { r#for: "intake-role", "Role title" }
            input {
                id: "intake-role",
                value: "{role_title}",
                oninput: move |evt| role_title.set(evt.value()),
            }
            label { r#for: "intake-team", "Team" }
            input {
                id: "intake-team",
                value: "{team}",
                oninput: move |evt| team.set(evt.value()),
            }
            label { r#for: "intake-seniority", "Seniority" }
            select {
                id: "intake-seniority",
                value: "{seniority_index}",
                onchange: move |evt| {
                    if let Some(level) = evt
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| Seniority::ALL.get(index).copied())
                    {
                        seniority.set(level);
                    }
                },
                for (index, level) in Seniority::ALL.iter().enumerate() {
                    option { key: "{index}", value: "{index}", "{level.label()}" }
                }
            }
            label { r#for: "intake-skills", "Skills (comma separated)" }
            input {
                id: "intake-skills",
                value: "{skills}",
                oninput: move |evt| skills.set(evt.value()),
            }
            label { r#for: "intake-openings", "Openings" }
            input {
                id: "intake-openings",
                r#type: "number",
                min: "0",
                value: "{openings}",
                oninput: move |evt| openings.set(evt.value()),
            }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: remote(),
                    onchange: move |evt| remote.set(evt.checked()),
                }
                "Remote friendly"
            }
            label { r#for: "intake-notes", "Notes" }
            textarea {
                id: "intake-notes",
                rows: "4",
                value: "{notes}",
                oninput: move |evt| notes.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Save intake" }
        }
    }
}

#[component]
pub fn CandidateJudgmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let intake = ctx.intake();
    let saved = use_resource(move || {
        let intake = intake.clone();
        async move { intake.load_judgment().await.map_err(|_| ViewError::Unknown) }
    });

    rsx! {
        div { class: "page judgment",
            h2 { "Candidate decision" }
            match view_state_from_resource(saved) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Error(err) => rsx! { p { "{err.message()}" } },
                ViewState::Ready(initial) => rsx! { CandidateJudgmentForm { initial } },
            }
        }
    }
}

#[component]
fn CandidateJudgmentForm(initial: Option<CandidateJudgment>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut candidate = use_signal(|| {
        initial
            .as_ref()
            .map(|judgment| judgment.candidate_name.clone())
            .unwrap_or_default()
    });
    let mut decision = use_signal(|| {
        initial
            .as_ref()
            .map_or(HiringDecision::Yes, |judgment| judgment.decision)
    });
    let mut notes = use_signal(|| {
        initial
            .as_ref()
            .and_then(|judgment| judgment.notes.clone())
            .unwrap_or_default()
    });
    let notice = use_signal(|| None::<Notice>);

    let on_submit = use_callback(move |()| {
        let mut notice = notice;
        let Some(candidate_name) = optional_text(&candidate()) else {
            notice.set(Some(Notice::Error("Candidate name is required.".into())));
            return;
        };
        let judgment = CandidateJudgment {
            candidate_name,
            decision: decision(),
            notes: optional_text(&notes()),
        };
        let service = ctx.intake();
        spawn(async move {
            match service.save_judgment(&judgment).await {
                Ok(()) => notice.set(Some(Notice::Success(format!(
                    "Recorded \"{}\" for {}.",
                    judgment.decision.label(),
                    judgment.candidate_name
                )))),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to save candidate judgment");
                    notice.set(Some(Notice::Error(ViewError::Unknown.message().into())));
                }
            }
        });
    });

    let current = decision();

    rsx! {
        NoticeBar { notice: notice() }
        form {
            class: "form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { r#for: "judgment-candidate", "Candidate" }
            input {
                id: "judgment-candidate",
                value: "{candidate}",
                oninput: move |evt| candidate.set(evt.value()),
            }
            fieldset { class: "decision-choices",
                legend { "Decision" }
                for option_decision in HiringDecision::ALL {
                    label { key: "{option_decision.label()}", class: "radio",
                        input {
                            r#type: "radio",
                            name: "decision",
                            checked: option_decision == current,
                            onchange: move |_| decision.set(option_decision),
                        }
                        "{option_decision.label()}"
                    }
                }
            }
            label { r#for: "judgment-notes", "Notes" }
            textarea {
                id: "judgment-notes",
                rows: "5",
                value: "{notes}",
                oninput: move |evt| notes.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Save decision" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_input_is_trimmed_and_split() {
        let intake = intake_from_input(
            " Platform Engineer ",
            "",
            Seniority::Senior,
            "rust, , go ,sql",
            " 2 ",
            true,
            "  ",
        )
        .unwrap();
        assert_eq!(intake.role_title, "Platform Engineer");
        assert_eq!(intake.team, None);
        assert_eq!(intake.skills, ["rust", "go", "sql"]);
        assert_eq!(intake.openings, 2);
        assert_eq!(intake.notes, None);
    }

    #[test]
    fn intake_input_rejects_missing_title_and_bad_openings() {
        let missing = intake_from_input(" ", "", Seniority::Mid, "", "1", false, "");
        assert_eq!(missing, Err("Role title is required."));
        let bad = intake_from_input("SRE", "", Seniority::Mid, "", "two", false, "");
        assert_eq!(bad, Err("Openings must be a whole number."));
    }
}
