use dioxus::prelude::*;

use mockview_core::model::{Difficulty, Modality};
use mockview_core::wizard::{
    InterviewWizard, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, WizardError,
};
use services::QuestionQueue;
use services::data::{EMPLOYERS, employer_by_slug};

use crate::context::AppContext;
use crate::views::{Notice, NoticeBar};

#[component]
pub fn SetupStep(wizard: Signal<InterviewWizard>, questions: Signal<QuestionQueue>) -> Element {
    let mut wizard = wizard;
    let ctx = use_context::<AppContext>();
    let bank = ctx.questions();
    let notice = use_signal(|| None::<Notice>);

    let mut report = move |result: Result<(), WizardError>| {
        let mut notice = notice;
        match result {
            Ok(()) => notice.set(None),
            Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
        }
    };

    let on_start = use_callback(move |()| {
        let mut questions = questions;
        let mut notice = notice;
        let mut guard = wizard.write();
        let config = match guard.advance() {
            Ok(active) => active.config().clone(),
            Err(err) => {
                notice.set(Some(Notice::Error(err.to_string())));
                return;
            }
        };
        let mut queue = bank.queue_for(&config.employer, config.difficulty);
        if let Some(opener) = queue.next_question() {
            let _ = guard.ask(&opener);
        }
        questions.set(queue);
        tracing::info!(
            employer = config.employer.slug,
            difficulty = config.difficulty.label(),
            minutes = config.duration_minutes,
            "interview started"
        );
    });

    let snapshot = wizard.read();
    let Some(draft) = snapshot.setup() else {
        return rsx! {};
    };
    let employer_slug = draft.employer().map_or("", |employer| employer.slug);
    let difficulty = draft.difficulty();
    let duration = draft
        .duration_minutes()
        .map(|minutes| minutes.to_string())
        .unwrap_or_default();
    let modality = draft.modality();
    let acknowledged = draft.resume_acknowledged();
    let ready = draft.is_complete();
    let has_employer = draft.employer().is_some();
    drop(snapshot);

    rsx! {
        div { class: "wizard-setup",
            h2 { "Set up your interview" }
            NoticeBar { notice: notice() }

            label { r#for: "setup-employer", "Target employer" }
            select {
                id: "setup-employer",
                value: "{employer_slug}",
                onchange: move |evt| {
                    let employer = employer_by_slug(&evt.value()).cloned();
                    report(wizard.write().select_employer(employer));
                },
                option { value: "", "Choose an employer" }
                for employer in EMPLOYERS.iter() {
                    option { key: "{employer.slug}", value: "{employer.slug}", "{employer.name}" }
                }
            }

            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: acknowledged,
                    onchange: move |evt| report(wizard.write().acknowledge_resume(evt.checked())),
                }
                "My resume is uploaded and up to date"
            }

            if has_employer {
                label { r#for: "setup-difficulty", "Difficulty" }
                select {
                    id: "setup-difficulty",
                    value: difficulty.map_or("", Difficulty::label),
                    onchange: move |evt| {
                        if let Some(level) = Difficulty::from_label(&evt.value()) {
                            report(wizard.write().set_difficulty(level));
                        }
                    },
                    for level in Difficulty::ALL {
                        option { key: "{level.label()}", value: "{level.label()}", "{level.label()}" }
                    }
                }

                label { r#for: "setup-duration", "Length (minutes)" }
                input {
                    id: "setup-duration",
                    r#type: "number",
                    min: "{MIN_DURATION_MINUTES}",
                    max: "{MAX_DURATION_MINUTES}",
                    value: "{duration}",
                    onchange: move |evt| {
                        match evt.value().trim().parse::<u32>() {
                            Ok(minutes) => report(wizard.write().set_duration(minutes)),
                            Err(_) => report(Err(WizardError::InvalidDuration)),
                        }
                    },
                }

                fieldset { class: "modality-choices",
                    legend { "Format" }
                    for option_modality in Modality::ALL {
                        label { key: "{option_modality.label()}", class: "radio",
                            input {
                                r#type: "radio",
                                name: "modality",
                                checked: modality == Some(option_modality),
                                onchange: move |_| report(wizard.write().set_modality(option_modality)),
                            }
                            "{option_modality.label()}"
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                aria_disabled: if ready { "false" } else { "true" },
                onclick: move |_| on_start.call(()),
                "Start interview"
            }
        }
    }
}
