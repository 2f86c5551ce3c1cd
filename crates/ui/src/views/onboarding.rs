use dioxus::prelude::*;

use mockview_core::forms::{Field, FormErrors, OnboardingDraft};
use mockview_core::model::Difficulty;
use services::AuthError;

use crate::context::AppContext;
use crate::session::use_ui_session;
use crate::views::components::FieldErrorText;
use crate::views::{Notice, NoticeBar};

#[component]
pub fn OnboardingView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let mut headline = use_signal(String::new);
    let mut target_level = use_signal(|| Difficulty::Medium);
    let mut portfolio = use_signal(String::new);
    let errors = use_signal(FormErrors::default);
    let notice = use_signal(|| None::<Notice>);

    let on_submit = use_callback(move |()| {
        let auth = ctx.auth();
        let draft = OnboardingDraft {
            headline: headline(),
            target_level: Some(target_level()),
            portfolio_url: Some(portfolio()),
        };
        let mut session = session;
        let mut errors = errors;
        let mut notice = notice;
        spawn(async move {
            let result = match auth.complete_onboarding(draft).await {
                Ok(form) => auth.current().await.map(|record| (form, record)),
                Err(err) => Err(err),
            };
            match result {
                Ok((form, record)) => {
                    tracing::debug!(headline = %form.headline, "onboarding saved");
                    errors.set(FormErrors::default());
                    session.publish(record);
                }
                Err(AuthError::Invalid(fields)) => errors.set(fields),
                Err(err) => {
                    tracing::warn!(error = %err, "onboarding failed");
                    notice.set(Some(Notice::Error(err.to_string())));
                }
            }
        });
    });

    let errors_now = errors();
    let level_label = target_level().label();

    rsx! {
        div { class: "page onboarding",
            h2 { "Tell us about yourself" }
            p { "This helps us pitch your first interview at the right level." }
            NoticeBar { notice: notice() }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "onboarding-headline", "Headline" }
                input {
                    id: "onboarding-headline",
                    placeholder: "Backend engineer, 4 years",
                    value: "{headline}",
                    oninput: move |evt| headline.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Headline }
                label { r#for: "onboarding-level", "Target level" }
                select {
                    id: "onboarding-level",
                    value: "{level_label}",
                    onchange: move |evt| {
                        if let Some(level) = Difficulty::from_label(&evt.value()) {
                            target_level.set(level);
                        }
                    },
                    for level in Difficulty::ALL {
                        option { key: "{level.label()}", value: "{level.label()}", "{level.label()}" }
                    }
                }
                label { r#for: "onboarding-portfolio", "Portfolio URL (optional)" }
                input {
                    id: "onboarding-portfolio",
                    r#type: "url",
                    value: "{portfolio}",
                    oninput: move |evt| portfolio.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::PortfolioUrl }
                button { class: "btn btn-primary", r#type: "submit", "Continue" }
            }
        }
    }
}
