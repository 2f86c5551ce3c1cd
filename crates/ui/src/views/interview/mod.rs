mod room;
mod scripts;
mod setup;
mod summary;

use dioxus::prelude::*;

use mockview_core::wizard::{InterviewWizard, WizardStage};
use services::QuestionQueue;

use crate::context::AppContext;

use room::InterviewRoom;
use setup::SetupStep;
use summary::SummaryStep;

#[component]
pub fn InterviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let wizard = use_signal(|| InterviewWizard::new(clock));
    let questions = use_signal(QuestionQueue::default);

    let stage = wizard.read().stage();
    let epoch = wizard.read().timer_epoch().unwrap_or_default();

    rsx! {
        div { class: "page interview",
            ol { class: "wizard-steps",
                StepLabel { label: "Setup", current: stage == WizardStage::Setup }
                StepLabel { label: "Interview", current: stage == WizardStage::Active }
                StepLabel { label: "Feedback", current: stage == WizardStage::Summary }
            }
            match stage {
                WizardStage::Setup => rsx! { SetupStep { wizard, questions } },
                // A fresh room per run, so its timer and media hooks start clean.
                WizardStage::Active => rsx! { InterviewRoom { key: "{epoch}", wizard, questions } },
                WizardStage::Summary => rsx! { SummaryStep { wizard, questions } },
            }
        }
    }
}

#[component]
fn StepLabel(label: &'static str, current: bool) -> Element {
    rsx! {
        li { class: if current { "wizard-step wizard-step--current" } else { "wizard-step" },
            aria_current: if current { "step" } else { "false" },
            "{label}"
        }
    }
}
