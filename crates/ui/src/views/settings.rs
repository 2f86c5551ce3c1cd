use dioxus::prelude::*;

use mockview_core::forms::{Field, FormErrors};
use mockview_core::model::{FontChoice, Profile, UserType};
use services::AuthError;

use crate::context::AppContext;
use crate::session::use_ui_session;
use crate::views::components::FieldErrorText;
use crate::views::{Notice, NoticeBar};

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let record = session.current();

    let mut name = use_signal(|| record.profile.name.clone().unwrap_or_default());
    let mut email = use_signal(|| record.profile.email.clone().unwrap_or_default());
    let errors = use_signal(FormErrors::default);
    let notice = use_signal(|| None::<Notice>);

    let auth = ctx.auth();
    let on_save_profile = use_callback(move |()| {
        let auth = auth.clone();
        let profile = Profile {
            name: Some(name()),
            email: Some(email()),
        };
        let mut session = session;
        let mut errors = errors;
        let mut notice = notice;
        spawn(async move {
            match auth.update_profile(profile).await {
                Ok(record) => {
                    errors.set(FormErrors::default());
                    notice.set(Some(Notice::Success("Profile saved.".into())));
                    session.publish(record);
                }
                Err(AuthError::Invalid(fields)) => errors.set(fields),
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
        });
    });

    let auth = ctx.auth();
    let on_role = use_callback(move |user_type: UserType| {
        let auth = auth.clone();
        let mut session = session;
        let mut notice = notice;
        spawn(async move {
            match auth.set_user_type(user_type).await {
                Ok(record) => {
                    notice.set(Some(Notice::Success(format!(
                        "You are now browsing as {}.",
                        user_type.label().to_lowercase()
                    ))));
                    session.publish(record);
                }
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
        });
    });

    let store = ctx.session_store();
    let on_font = use_callback(move |font: FontChoice| {
        let store = store.clone();
        let mut session = session;
        let mut notice = notice;
        session.set_font(font);
        spawn(async move {
            if let Err(err) = store.set_font(font).await {
                tracing::warn!(error = %err, "failed to persist font choice");
                notice.set(Some(Notice::Error("Could not save your font choice.".into())));
            }
        });
    });

    let auth = ctx.auth();
    let on_logout = use_callback(move |()| {
        let auth = auth.clone();
        let mut session = session;
        let mut notice = notice;
        spawn(async move {
            match auth.logout().await {
                Ok(()) => {
                    session.set_font(FontChoice::default());
                    session.publish(Default::default());
                }
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
        });
    });

    let errors_now = errors();
    let current_font = session.font();
    let other_role = if record.is_interviewer() {
        UserType::Candidate
    } else {
        UserType::Interviewer
    };

    rsx! {
        div { class: "page settings",
            h2 { "Settings" }
            NoticeBar { notice: notice() }

            section { class: "settings__section",
                h3 { "Profile" }
                form {
                    class: "form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_save_profile.call(());
                    },
                    label { r#for: "settings-name", "Name" }
                    input {
                        id: "settings-name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { r#for: "settings-email", "Email" }
                    input {
                        id: "settings-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    FieldErrorText { errors: errors_now.clone(), field: Field::Email }
                    button { class: "btn btn-primary", r#type: "submit", "Save profile" }
                }
            }

            section { class: "settings__section",
                h3 { "Reading font" }
                div { class: "font-choices", role: "radiogroup",
                    for font in FontChoice::ALL {
                        label { key: "{font.stored_value()}", class: "font-choice",
                            input {
                                r#type: "radio",
                                name: "font",
                                value: "{font.stored_value()}",
                                checked: font == current_font,
                                onchange: move |_| on_font.call(font),
                            }
                            span { style: "font-family: {font.css_family()};", "{font.label()}" }
                        }
                    }
                }
            }

            section { class: "settings__section",
                h3 { "Role" }
                p { "You are using Mockview as {record.user_type.label().to_lowercase()}." }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_role.call(other_role),
                    "Switch to {other_role.label().to_lowercase()}"
                }
            }

            section { class: "settings__section",
                h3 { "Session" }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }
        }
    }
}
