use dioxus::prelude::*;
use dioxus_router::Link;

use mockview_core::forms::{Field, FormErrors, LoginDraft, SignupDraft};
use mockview_core::model::UserType;
use services::AuthError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_ui_session;
use crate::views::components::FieldErrorText;
use crate::views::{Notice, NoticeBar};

/// Split an auth failure into field errors and a banner message.
fn describe_auth_error(err: AuthError) -> (FormErrors, Option<Notice>) {
    match err {
        AuthError::Invalid(errors) => (errors, None),
        AuthError::Rejected | AuthError::AlreadyRegistered => {
            (FormErrors::default(), Some(Notice::Error(err.to_string())))
        }
        other => {
            tracing::warn!(error = %other, "auth request failed");
            (
                FormErrors::default(),
                Some(Notice::Error("Something went wrong. Please try again.".into())),
            )
        }
    }
}

fn user_type_value(user_type: UserType) -> &'static str {
    user_type.stored_value().unwrap_or("candidate")
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let errors = use_signal(FormErrors::default);
    let notice = use_signal(|| None::<Notice>);
    let submitting = use_signal(|| false);

    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let auth = ctx.auth();
        let draft = LoginDraft {
            email: email(),
            password: password(),
        };
        let mut session = session;
        let mut errors = errors;
        let mut notice = notice;
        let mut submitting = submitting;
        spawn(async move {
            submitting.set(true);
            match auth.login(draft).await {
                Ok(record) => {
                    errors.set(FormErrors::default());
                    notice.set(None);
                    session.publish(record);
                }
                Err(err) => {
                    let (fields, banner) = describe_auth_error(err);
                    errors.set(fields);
                    notice.set(banner);
                }
            }
            submitting.set(false);
        });
    });

    let errors_now = errors();
    let busy = submitting();

    rsx! {
        div { class: "page auth",
            h2 { "Log in" }
            NoticeBar { notice: notice() }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Email }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Password }
                button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                    if busy { "Signing in..." } else { "Log in" }
                }
            }
            p { "No account yet? " Link { to: Route::Signup {}, "Sign up" } }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut user_type = use_signal(UserType::default);
    let errors = use_signal(FormErrors::default);
    let notice = use_signal(|| None::<Notice>);
    let submitting = use_signal(|| false);

    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let auth = ctx.auth();
        let draft = SignupDraft {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm(),
            user_type: user_type(),
        };
        let mut session = session;
        let mut errors = errors;
        let mut notice = notice;
        let mut submitting = submitting;
        spawn(async move {
            submitting.set(true);
            match auth.signup(draft).await {
                Ok(record) => {
                    errors.set(FormErrors::default());
                    notice.set(None);
                    session.publish(record);
                }
                Err(err) => {
                    let (fields, banner) = describe_auth_error(err);
                    errors.set(fields);
                    notice.set(banner);
                }
            }
            submitting.set(false);
        });
    });

    let errors_now = errors();
    let busy = submitting();
    let selected_type = user_type_value(user_type());

    rsx! {
        div { class: "page auth",
            h2 { "Create your account" }
            NoticeBar { notice: notice() }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "signup-name", "Name" }
                input {
                    id: "signup-name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Name }
                label { r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Email }
                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Password }
                label { r#for: "signup-confirm", "Confirm password" }
                input {
                    id: "signup-confirm",
                    r#type: "password",
                    value: "{confirm}",
                    oninput: move |evt| confirm.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::ConfirmPassword }
                label { r#for: "signup-role", "I am a" }
                select {
                    id: "signup-role",
                    value: "{selected_type}",
                    onchange: move |evt| user_type.set(UserType::from_stored(Some(&evt.value()))),
                    for option_type in [UserType::Candidate, UserType::Interviewer] {
                        option {
                            key: "{user_type_value(option_type)}",
                            value: "{user_type_value(option_type)}",
                            "{option_type.label()}"
                        }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                    if busy { "Creating account..." } else { "Sign up" }
                }
            }
            p { "Already registered? " Link { to: Route::Login {}, "Log in" } }
        }
    }
}
