use dioxus::prelude::*;

use mockview_core::forms::{ContactDraft, Field, FormErrors};
use services::ContactError;

use crate::context::AppContext;
use crate::session::use_ui_session;
use crate::views::components::FieldErrorText;
use crate::views::{Notice, NoticeBar};

#[component]
pub fn ContactView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let profile = session.current().profile;

    let mut name = use_signal(|| profile.name.clone().unwrap_or_default());
    let mut email = use_signal(|| profile.email.clone().unwrap_or_default());
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let errors = use_signal(FormErrors::default);
    let notice = use_signal(|| None::<Notice>);
    let sending = use_signal(|| false);

    let on_submit = use_callback(move |()| {
        if sending() {
            return;
        }
        let contact = ctx.contact();
        let draft = ContactDraft {
            name: name(),
            email: email(),
            subject: Some(subject()),
            message: message(),
        };
        let mut errors = errors;
        let mut notice = notice;
        let mut sending = sending;
        spawn(async move {
            sending.set(true);
            match contact.submit(draft).await {
                Ok(receipt) => {
                    errors.set(FormErrors::default());
                    notice.set(Some(Notice::Success(format!(
                        "Thanks, {}. Your reference is {}.",
                        receipt.form.name, receipt.reference
                    ))));
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(ContactError::Invalid(fields)) => errors.set(fields),
                Err(err) => notice.set(Some(Notice::Error(err.to_string()))),
            }
            sending.set(false);
        });
    });

    let errors_now = errors();
    let busy = sending();

    rsx! {
        div { class: "page contact",
            h2 { "Contact us" }
            NoticeBar { notice: notice() }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Name }
                label { r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Email }
                label { r#for: "contact-subject", "Subject (optional)" }
                input {
                    id: "contact-subject",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Subject }
                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    rows: "6",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                FieldErrorText { errors: errors_now.clone(), field: Field::Message }
                button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                    if busy { "Sending..." } else { "Send message" }
                }
            }
        }
    }
}
